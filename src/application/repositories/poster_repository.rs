use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::{dto::poster_dto::NewPosterDTO, error::ApplicationError},
    domain::models::{
        party::Party,
        poster::{Poster, PosterListing},
    },
};

#[async_trait]
pub trait PosterRepository: Send + Sync {
    async fn create_poster(&self, poster: NewPosterDTO) -> Result<Poster, ApplicationError>;
    async fn get_poster(&self, poster_id: Uuid) -> Result<PosterListing, ApplicationError>;
    /// Newest first.
    async fn list_posters(&self) -> Result<Vec<PosterListing>, ApplicationError>;
    async fn list_parties(&self) -> Result<Vec<Party>, ApplicationError>;
}
