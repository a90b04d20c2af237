use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What an uploaded image is for. Selects the storage filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadContext {
    #[default]
    Poster,
    Avatar,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown upload type '{0}'")]
pub struct UnknownUploadContext(pub String);

impl UploadContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadContext::Poster => "poster",
            UploadContext::Avatar => "avatar",
        }
    }
}

impl fmt::Display for UploadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadContext {
    type Err = UnknownUploadContext;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "poster" => Ok(UploadContext::Poster),
            "avatar" => Ok(UploadContext::Avatar),
            other => Err(UnknownUploadContext(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_contexts() {
        assert_eq!("poster".parse(), Ok(UploadContext::Poster));
        assert_eq!("avatar".parse(), Ok(UploadContext::Avatar));
        assert_eq!(UploadContext::default(), UploadContext::Poster);
    }

    #[test]
    fn rejects_unknown_context() {
        assert_eq!(
            "banner".parse::<UploadContext>(),
            Err(UnknownUploadContext("banner".to_string()))
        );
    }
}
