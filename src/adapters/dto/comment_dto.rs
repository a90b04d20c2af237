use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use uuid::Uuid;

use crate::domain::models::comment::{Comment, CommentAuthor, ANONYMOUS_AUTHOR_NAME};

impl FromRow<'_, PgRow> for Comment {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let user_id: Uuid = row.try_get("user_id")?;
        let author_name: Option<String> = row.try_get("author_full_name")?;
        Ok(Comment {
            id: row.try_get("id")?,
            poster_id: row.try_get("poster_id")?,
            user_id,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
            profile: CommentAuthor {
                id: user_id,
                full_name: author_name.unwrap_or_else(|| ANONYMOUS_AUTHOR_NAME.to_string()),
            },
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PosterQuery {
    #[serde(rename = "posterId")]
    pub poster_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(rename = "posterId")]
    pub poster_id: Option<Uuid>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}
