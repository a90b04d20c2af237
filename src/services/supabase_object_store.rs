use async_trait::async_trait;
use reqwest::{multipart, Client};

use crate::{
    application::{error::ApplicationError, services::ObjectStore},
    domain::{
        config::settings::{Provider, SupabaseStorageSettings},
        models::file::StoredObject,
    },
    services::error::StorageError,
};

/// Objects kept in a Supabase Storage bucket, addressed by the same keys the
/// local store uses.
pub struct SupabaseObjectStore {
    client: Client,
    storage_url: String,
    api_key: String,
    bucket_name: String,
}

impl SupabaseObjectStore {
    pub fn new(settings: SupabaseStorageSettings) -> Self {
        Self {
            client: Client::new(),
            storage_url: settings.storage_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key,
            bucket_name: settings.bucket_name,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/object/{}/{}", self.storage_url, self.bucket_name, key)
    }
}

#[async_trait]
impl ObjectStore for SupabaseObjectStore {
    async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        mime_type: &str,
    ) -> Result<StoredObject, ApplicationError> {
        let size = content.len() as u64;

        let file_part = multipart::Part::bytes(content)
            .file_name(key.to_string())
            .mime_str(mime_type)
            .map_err(|e| StorageError::InternalError(e.to_string()))?;

        let form = multipart::Form::new().part("file", file_part);

        let response = self
            .client
            .post(self.object_url(key))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("apikey", &self.api_key)
            // Refuse to replace an existing object.
            .header("x-upsert", "false")
            .multipart(form)
            .send()
            .await
            .map_err(StorageError::from)?;

        if response.status().as_u16() == 409 {
            return Err(StorageError::AlreadyExists(key.to_string()).into());
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(
                StorageError::ProviderError(format!("Upload failed: {}", error_text)).into(),
            );
        }

        Ok(StoredObject {
            key: key.to_string(),
            size,
            mime_type: mime_type.to_string(),
            provider: Provider::Supabase.as_str().to_string(),
        })
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, ApplicationError> {
        let response = self
            .client
            .get(self.object_url(key))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(StorageError::from)?;

        // Supabase answers 400 for keys that do not exist in the bucket.
        if matches!(response.status().as_u16(), 400 | 404) {
            return Err(StorageError::NotFound(key.to_string()).into());
        }

        if !response.status().is_success() {
            return Err(StorageError::ProviderError(format!(
                "Download failed with status: {}",
                response.status()
            ))
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::NetworkError(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    fn provider(&self) -> Provider {
        Provider::Supabase
    }
}
