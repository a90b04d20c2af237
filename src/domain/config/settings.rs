use std::{path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPLOADS_DIR: &str = "/tmp/poster_uploads";
const DEFAULT_BUCKET: &str = "posters";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "supabase")]
    Supabase,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Local => "local",
            Provider::Supabase => "supabase",
        }
    }
}

impl FromStr for Provider {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Provider::Local),
            "supabase" => Ok(Provider::Supabase),
            _ => Err(SettingsError::Invalid {
                key: "STORAGE_PROVIDER",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct SupabaseStorageSettings {
    pub storage_url: String,
    pub api_key: String,
    pub bucket_name: String,
}

/// Process configuration, read once from the environment at startup.
#[derive(Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub uploads_dir: PathBuf,
    pub provider: Provider,
    pub supabase: Option<SupabaseStorageSettings>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(SettingsError::Missing(key));

        let port = match get("PORT") {
            Some(value) => match value.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(SettingsError::Invalid { key: "PORT", value }),
            },
            None => DEFAULT_PORT,
        };

        let provider = get("STORAGE_PROVIDER")
            .map(|value| value.parse::<Provider>())
            .transpose()?
            .unwrap_or(Provider::Local);

        let supabase = match provider {
            Provider::Supabase => Some(SupabaseStorageSettings {
                storage_url: require("SUPABASE_STORAGE_URL")?,
                api_key: require("SUPABASE_SERVICE_KEY")?,
                bucket_name: get("SUPABASE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            }),
            Provider::Local => None,
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        });

        Ok(Settings {
            port,
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("SUPABASE_JWT_SECRET")?,
            uploads_dir: get("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_DIR)),
            provider,
            supabase,
            cors_allowed_origins,
        })
    }
}
