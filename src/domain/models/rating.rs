use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    #[serde(rename = "posterId")]
    pub poster_id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub rating: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "totalRatings")]
    pub total_ratings: usize,
    #[serde(rename = "userRating")]
    pub user_rating: Option<i32>,
}
