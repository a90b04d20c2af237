use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::session::SessionUser};

#[async_trait]
pub trait AuthSession: Send + Sync {
    /// Resolves a bearer access token to the user it was issued for.
    async fn resolve(&self, access_token: &str) -> Result<SessionUser, ApplicationError>;
}
