//! Environment configuration for the sync tool
//!
//! The service URL and service-role credential come from the environment
//! (optionally via a `.env` file). Both are required; the tool exits before
//! any network traffic when either is missing or the credential is still the
//! placeholder from a freshly copied `.env.example`.

use crate::error::{Result, SyncError};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_SERVICE_KEY";

const KEY_PLACEHOLDER: &str = "your_service_role_key_here";

/// Validated backend connection settings
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub supabase_url: String,
    pub service_key: String,
}

impl SyncConfig {
    /// Build a config from raw variable values, validating both
    pub fn from_values(url: Option<String>, key: Option<String>) -> Result<Self> {
        let url = url
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SyncError::Config(format!("Missing {} in environment", URL_VAR)))?;
        let key = key
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SyncError::Config(format!("Missing {} in environment", KEY_VAR)))?;

        if key.contains(KEY_PLACEHOLDER) {
            return Err(SyncError::Config(format!(
                "{} is still the placeholder value; set a real service-role key",
                KEY_VAR
            )));
        }

        Ok(Self {
            supabase_url: url.trim_end_matches('/').to_string(),
            service_key: key,
        })
    }

    /// Load from the process environment, reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_values(std::env::var(URL_VAR).ok(), std::env::var(KEY_VAR).ok())
    }
}
