use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    application::{dto::profile_dto::ProfileDTO, error::ApplicationError},
    domain::models::{profile::Profile, session::SessionUser},
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Profile, ApplicationError>;
    /// Creates the profile from session claims if it does not exist yet.
    /// An existing profile is never modified.
    async fn ensure_profile(&self, user: &SessionUser) -> Result<(), ApplicationError>;
    async fn update_profile(&self, profile: ProfileDTO) -> Result<Profile, ApplicationError>;
}
