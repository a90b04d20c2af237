use serde::{Deserialize, Serialize};

use crate::domain::models::file::StoredObject;

pub const UPLOADS_URL_PREFIX: &str = "/uploads";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: u64,
    /// MIME type the file was declared and validated as.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<StoredObject> for UploadResponse {
    fn from(object: StoredObject) -> Self {
        Self {
            url: format!("{}/{}", UPLOADS_URL_PREFIX, object.key),
            filename: object.key,
            size: object.size,
            mime_type: object.mime_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PrecheckRequest {
    pub filename: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub size: u64,
}
