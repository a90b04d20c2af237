use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, services::AuthSession},
    domain::models::session::SessionUser,
};

pub const ACCESS_TOKEN_AUDIENCE: &str = "authenticated";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Claims of an access token issued by the hosted auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub aud: String,
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Verifies HS256 access tokens locally with the project's JWT secret.
pub struct JwtAuthSession {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtAuthSession {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[ACCESS_TOKEN_AUDIENCE]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl AuthSession for JwtAuthSession {
    async fn resolve(&self, access_token: &str) -> Result<SessionUser, ApplicationError> {
        let token = decode::<AccessClaims>(access_token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("Rejected access token: {}", e);
                ApplicationError::Unauthorized
            })?;

        let claims = token.claims;
        Ok(SessionUser {
            id: claims.sub,
            email: claims.email,
            full_name: claims.user_metadata.full_name,
            avatar_url: claims.user_metadata.avatar_url,
        })
    }
}
