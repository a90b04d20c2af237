mod error;
mod jwt_auth_session;
mod local_object_store;
mod supabase_object_store;

pub use error::StorageError;
pub use jwt_auth_session::JwtAuthSession;
pub use local_object_store::LocalObjectStore;
pub use supabase_object_store::SupabaseObjectStore;

#[cfg(test)]
pub use jwt_auth_session::test_tokens;

use std::sync::Arc;

use crate::{
    application::services::ObjectStore,
    domain::config::settings::{Provider, Settings},
};

pub async fn create_object_store(settings: &Settings) -> Result<Arc<dyn ObjectStore>, StorageError> {
    match settings.provider {
        Provider::Local => {
            let store = LocalObjectStore::new(&settings.uploads_dir).await?;
            Ok(Arc::new(store))
        }
        Provider::Supabase => {
            let supabase = settings.supabase.as_ref().ok_or_else(|| {
                StorageError::InvalidCredentials("Supabase storage settings not found".to_string())
            })?;

            Ok(Arc::new(SupabaseObjectStore::new(supabase.clone())))
        }
    }
}
