use serde::{Deserialize, Serialize};

use crate::domain::upload::{validate_server_side, UploadContext, ValidationOutcome};

/// A file received by the upload endpoint, before it is trusted.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub content: Vec<u8>,
    pub declared_filename: String,
    pub declared_mime_type: String,
}

impl UploadCandidate {
    pub fn new(content: Vec<u8>, declared_filename: String, declared_mime_type: String) -> Self {
        Self {
            content,
            declared_filename,
            declared_mime_type,
        }
    }

    pub fn byte_size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn validate(&self, context: UploadContext) -> ValidationOutcome {
        validate_server_side(
            &self.declared_filename,
            &self.declared_mime_type,
            self.byte_size(),
            &self.content,
            context,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredObject {
    pub key: String,
    pub size: u64,
    pub mime_type: String,
    pub provider: String,
}
