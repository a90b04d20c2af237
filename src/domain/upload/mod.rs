//! Image upload policy: the allow-list of raster formats, the layered
//! validator run before anything is persisted, and storage key derivation.

pub mod context;
pub mod filename;
pub mod formats;
pub mod object_key;
pub mod validation;

pub use context::UploadContext;
pub use filename::derive_storage_filename;
pub use formats::content_type_for_path;
pub use object_key::{normalize_object_key, ObjectKeyError};
pub use validation::{
    validate_client_side, validate_server_side, ValidationErrorCode, ValidationOutcome,
    MAX_FILE_SIZE, MIN_FILE_SIZE,
};
