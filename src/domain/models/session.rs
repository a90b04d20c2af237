use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FALLBACK_EMAIL: &str = "unknown@example.com";
const FALLBACK_NAME: &str = "Unknown User";

/// The caller resolved from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl SessionUser {
    pub fn profile_email(&self) -> &str {
        self.email.as_deref().unwrap_or(FALLBACK_EMAIL)
    }

    /// Name used when a profile is created on the user's behalf.
    pub fn profile_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(FALLBACK_NAME)
    }
}
