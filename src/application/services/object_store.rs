use async_trait::async_trait;

use crate::{
    application::error::ApplicationError, domain::config::settings::Provider,
    domain::models::file::StoredObject,
};

/// Blob storage for accepted uploads. Keys are normalised before they get here.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        mime_type: &str,
    ) -> Result<StoredObject, ApplicationError>;
    async fn get(&self, key: &str) -> Result<Vec<u8>, ApplicationError>;
    fn provider(&self) -> Provider;
}
