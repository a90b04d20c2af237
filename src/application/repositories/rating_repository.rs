use async_trait::async_trait;
use uuid::Uuid;

use crate::{application::error::ApplicationError, domain::models::rating::Rating};

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Inserts the rating or replaces the user's previous rating of the poster.
    async fn upsert_rating(
        &self,
        poster_id: Uuid,
        user_id: Uuid,
        rating: i32,
    ) -> Result<Rating, ApplicationError>;
    async fn get_ratings(&self, poster_id: Uuid) -> Result<Vec<Rating>, ApplicationError>;
}
