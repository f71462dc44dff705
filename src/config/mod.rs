//! Configuration module for Recap.
//!
//! Handles loading runtime settings from the environment and prompt templates
//! from YAML files.

mod prompts;
mod settings;

pub use prompts::{
    Prompts, DEFAULT_PROMPTS_DIR, SYSTEM_PROMPTS_FILE, SYSTEM_PROMPT_KEY, USER_PROMPTS_FILE,
    USER_PROMPT_KEY,
};
pub use settings::Settings;
