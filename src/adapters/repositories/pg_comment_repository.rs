use async_trait::async_trait;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::comment_repository::CommentRepository},
    domain::models::comment::Comment,
};

pub struct PgCommentRepository {
    pool: sqlx::PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create_comment(
        &self,
        poster_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment, ApplicationError> {
        let query = r#"
            WITH inserted AS (
                INSERT INTO comments (poster_id, user_id, content)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT c.*, pr.full_name AS author_full_name
            FROM inserted c
            LEFT JOIN profiles pr ON pr.id = c.user_id
        "#;

        query_as::<_, Comment>(query)
            .bind(poster_id)
            .bind(user_id)
            .bind(content)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }

    async fn list_comments(&self, poster_id: Uuid) -> Result<Vec<Comment>, ApplicationError> {
        let query = r#"
            SELECT c.*, pr.full_name AS author_full_name
            FROM comments c
            LEFT JOIN profiles pr ON pr.id = c.user_id
            WHERE c.poster_id = $1
            ORDER BY c.created_at DESC
        "#;

        query_as::<_, Comment>(query)
            .bind(poster_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }
}
