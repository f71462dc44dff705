//! Runtime settings for Recap.
//!
//! Every setting comes from the process environment as plain text. Nothing is
//! validated or defaulted here: an unset variable becomes an empty string and
//! surfaces later as a failed request or an unreadable folder.

use std::path::PathBuf;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable holding the LLM server base URL.
pub const BASE_URL_VAR: &str = "LLM_SERVER_BASE_URL";
/// Environment variable holding the chat endpoint path.
pub const ENDPOINT_VAR: &str = "LLM_SERVER_ENDPOINT";
/// Environment variable holding the model identifier.
pub const MODEL_VAR: &str = "LLM_MODEL";
/// Environment variable holding the sampling temperature.
pub const TEMPERATURE_VAR: &str = "TEMPERATURE";
/// Environment variable holding the folder scanned for transcripts.
pub const TARGET_FOLDER_VAR: &str = "TARGET_FOLDER";

/// Flat runtime configuration.
#[derive(Clone, Default, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub endpoint: String,
    pub model: String,
    /// Sampling temperature, kept as text until the request is built.
    pub temperature: String,
    pub target_folder: String,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).unwrap_or_default();

        Self {
            api_key: var(API_KEY_VAR),
            base_url: var(BASE_URL_VAR),
            endpoint: var(ENDPOINT_VAR),
            model: var(MODEL_VAR),
            temperature: var(TEMPERATURE_VAR),
            target_folder: var(TARGET_FOLDER_VAR),
        }
    }

    /// Full request target, base URL followed by the endpoint path.
    pub fn request_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    /// Get the expanded target folder path (e.g., `~` resolved).
    pub fn target_folder_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.target_folder).to_string())
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("Settings")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("target_folder", &self.target_folder)
            .finish()
    }
}
