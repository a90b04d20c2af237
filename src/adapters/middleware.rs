use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::{
    application::{error::ApplicationError, services::AuthSession},
    domain::models::session::SessionUser,
};

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the caller if a valid bearer token is present; anonymous otherwise.
pub async fn optional_session(
    auth_session: &Arc<dyn AuthSession>,
    headers: &HeaderMap,
) -> Option<SessionUser> {
    let token = bearer_token(headers)?;
    auth_session.resolve(token).await.ok()
}

/// Middleware for routes that need a signed-in user. Inserts [`SessionUser`]
/// into the request extensions.
pub async fn require_session(
    State(auth_session): State<Arc<dyn AuthSession>>,
    headers: HeaderMap,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        warn!("Missing bearer token");
        return ApplicationError::Unauthorized.into_response();
    };

    match auth_session.resolve(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}
