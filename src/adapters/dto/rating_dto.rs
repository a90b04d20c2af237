use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};
use uuid::Uuid;

use crate::domain::models::rating::Rating;

impl FromRow<'_, PgRow> for Rating {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Rating {
            id: row.try_get("id")?,
            poster_id: row.try_get("poster_id")?,
            user_id: row.try_get("user_id")?,
            rating: row.try_get("rating")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitRatingRequest {
    #[serde(rename = "posterId")]
    pub poster_id: Option<Uuid>,
    pub rating: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub rating: Rating,
}
