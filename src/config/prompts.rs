//! Prompt templates for Recap.
//!
//! Prompts live in two YAML mappings of named prompt strings. Only one key is
//! consumed from each file.

use crate::error::{RecapError, Result};
use std::path::Path;
use tracing::debug;

/// Default directory holding the prompt files, relative to the working directory.
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";
/// File holding system prompts.
pub const SYSTEM_PROMPTS_FILE: &str = "system_prompts.yaml";
/// File holding user prompts.
pub const USER_PROMPTS_FILE: &str = "user_prompts.yaml";
/// Key of the meeting summarizer system prompt.
pub const SYSTEM_PROMPT_KEY: &str = "system_prompt_meeting_summarizer";
/// Key of the meeting summarizer user prompt.
pub const USER_PROMPT_KEY: &str = "user_prompt_meeting_summarizer_v1";

/// The system/user prompt pair sent with every transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompts {
    pub system: String,
    /// User instruction, prepended verbatim to the transcript.
    pub user: String,
}

impl Prompts {
    /// Load both prompts from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let system = load_prompt(&dir.join(SYSTEM_PROMPTS_FILE), SYSTEM_PROMPT_KEY)?;
        let user = load_prompt(&dir.join(USER_PROMPTS_FILE), USER_PROMPT_KEY)?;

        debug!(
            "Loaded prompts from {} ({} + {} chars)",
            dir.display(),
            system.len(),
            user.len()
        );

        Ok(Self { system, user })
    }

    /// Build the user message: the template directly followed by the transcript.
    pub fn user_message(&self, transcript: &str) -> String {
        let mut message = String::with_capacity(self.user.len() + transcript.len());
        message.push_str(&self.user);
        message.push_str(transcript);
        message
    }
}

/// Read one YAML file and return the string stored under `key`.
fn load_prompt(path: &Path, key: &str) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RecapError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let document: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
        RecapError::Config(format!("Invalid YAML in {}: {}", path.display(), e))
    })?;

    let value = document.get(key).ok_or_else(|| {
        RecapError::Config(format!("Missing key '{}' in {}", key, path.display()))
    })?;

    value.as_str().map(str::to_string).ok_or_else(|| {
        RecapError::Config(format!(
            "Key '{}' in {} is not a string",
            key,
            path.display()
        ))
    })
}
