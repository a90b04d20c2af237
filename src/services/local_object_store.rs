use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{info, warn};

use crate::{
    application::{error::ApplicationError, services::ObjectStore},
    domain::{
        config::settings::Provider, models::file::StoredObject, upload::normalize_object_key,
    },
    services::error::StorageError,
};

/// Objects stored as plain files beneath a root directory.
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref();
        fs::create_dir_all(root).await?;
        let root = fs::canonicalize(root).await?;
        info!("Local object store rooted at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let key =
            normalize_object_key(key).map_err(|_| StorageError::OutsideRoot(key.to_string()))?;
        Ok(self.root.join(key))
    }

    // Canonicalising follows symlinks, so a link pointing out of the root is caught here.
    async fn resolve_existing(&self, key: &str) -> Result<PathBuf, StorageError> {
        let path = self.path_for(key)?;
        let canonical = fs::canonicalize(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
            _ => StorageError::Io(e),
        })?;

        if !canonical.starts_with(&self.root) {
            warn!("Object key '{}' resolves outside {}", key, self.root.display());
            return Err(StorageError::OutsideRoot(key.to_string()));
        }
        Ok(canonical)
    }

    async fn write_new(&self, key: &str, content: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists(key.to_string()),
                _ => StorageError::Io(e),
            })?;

        file.write_all(content).await?;
        file.sync_all().await?;
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        mime_type: &str,
    ) -> Result<StoredObject, ApplicationError> {
        self.write_new(key, &content).await?;

        info!("Stored object '{}' ({} bytes)", key, content.len());

        Ok(StoredObject {
            key: key.to_string(),
            size: content.len() as u64,
            mime_type: mime_type.to_string(),
            provider: Provider::Local.as_str().to_string(),
        })
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, ApplicationError> {
        let path = self.resolve_existing(key).await?;
        if !fs::metadata(&path)
            .await
            .map_err(StorageError::from)?
            .is_file()
        {
            return Err(StorageError::NotFound(key.to_string()).into());
        }
        let bytes = fs::read(&path).await.map_err(StorageError::from)?;
        Ok(bytes)
    }

    fn provider(&self) -> Provider {
        Provider::Local
    }
}
