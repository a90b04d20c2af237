use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use tracing::warn;

use crate::{
    application::{error::ApplicationError, services::ObjectStore},
    domain::upload::{content_type_for_path, normalize_object_key, ObjectKeyError},
};

const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

pub struct MediaController;

impl MediaController {
    /// GET /uploads/{*path}
    pub async fn serve_upload(
        State(object_store): State<Arc<dyn ObjectStore>>,
        Path(path): Path<String>,
    ) -> Result<Response, ApplicationError> {
        let key = normalize_object_key(&path).map_err(|e| match e {
            ObjectKeyError::EscapesRoot => {
                warn!("Refused upload path outside root: {}", path);
                ApplicationError::Forbidden
            }
            ObjectKeyError::Empty => ApplicationError::NotFound,
        })?;

        let bytes = object_store.get(&key).await?;

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, content_type_for_path(&key))
            .header(header::CONTENT_LENGTH, bytes.len())
            .header(header::CACHE_CONTROL, IMMUTABLE_CACHE)
            .body(Body::from(bytes))
            .map_err(|e| ApplicationError::InternalError(e.to_string()))
    }
}
