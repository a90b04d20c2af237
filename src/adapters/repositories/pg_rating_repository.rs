use async_trait::async_trait;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::rating_repository::RatingRepository},
    domain::models::rating::Rating,
};

pub struct PgRatingRepository {
    pool: sqlx::PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    async fn upsert_rating(
        &self,
        poster_id: Uuid,
        user_id: Uuid,
        rating: i32,
    ) -> Result<Rating, ApplicationError> {
        let query = r#"
            INSERT INTO ratings (poster_id, user_id, rating)
            VALUES ($1, $2, $3)
            ON CONFLICT (poster_id, user_id) DO UPDATE SET rating = EXCLUDED.rating
            RETURNING *
        "#;

        query_as::<_, Rating>(query)
            .bind(poster_id)
            .bind(user_id)
            .bind(rating)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }

    async fn get_ratings(&self, poster_id: Uuid) -> Result<Vec<Rating>, ApplicationError> {
        let query = "SELECT * FROM ratings WHERE poster_id = $1";

        query_as::<_, Rating>(query)
            .bind(poster_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }
}
