use chrono::Utc;

use super::{context::UploadContext, validation::file_extension};

const FALLBACK_EXTENSION: &str = "jpg";

/// `{prefix}-{millis}-{user_id}.{ext}`. Unique across users by construction;
/// two uploads by one user in the same millisecond produce the same name.
pub fn derive_storage_filename(original_name: &str, user_id: &str, context: UploadContext) -> String {
    storage_filename_at(original_name, user_id, context, Utc::now().timestamp_millis())
}

fn storage_filename_at(
    original_name: &str,
    user_id: &str,
    context: UploadContext,
    timestamp_millis: i64,
) -> String {
    let extension =
        file_extension(original_name).unwrap_or_else(|| FALLBACK_EXTENSION.to_string());
    format!(
        "{}-{}-{}.{}",
        context.as_str(),
        timestamp_millis,
        user_id,
        extension
    )
}
