use async_trait::async_trait;
use uuid::Uuid;

use crate::{application::error::ApplicationError, domain::models::comment::Comment};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        poster_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment, ApplicationError>;
    /// Newest first.
    async fn list_comments(&self, poster_id: Uuid) -> Result<Vec<Comment>, ApplicationError>;
}
