//! CLI module for Recap.

mod output;
mod summarize;

pub use output::Output;
pub use summarize::run_summarize;

use crate::config::{Settings, DEFAULT_PROMPTS_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Recap - Meeting transcript summarizer
///
/// Summarizes the most recently modified transcript (.txt, .srt, .md) in the
/// target folder with an OpenAI-compatible LLM server. Settings are read from
/// the environment (and a local .env file); flags override them.
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory containing system_prompts.yaml and user_prompts.yaml
    #[arg(long, default_value = DEFAULT_PROMPTS_DIR)]
    pub prompts_dir: PathBuf,

    /// Folder to scan for transcripts (overrides TARGET_FOLDER)
    #[arg(short, long)]
    pub target_folder: Option<String>,

    /// LLM server base URL (overrides LLM_SERVER_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Chat endpoint path (overrides LLM_SERVER_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model identifier (overrides LLM_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Sampling temperature (overrides TEMPERATURE)
    #[arg(long)]
    pub temperature: Option<String>,

    /// API key (overrides API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Also save the full JSON response as <name>_response.json
    #[arg(long)]
    pub save_response: bool,

    /// Print the selected transcript to stdout before summarizing
    #[arg(long)]
    pub print_transcript: bool,
}

impl Cli {
    /// Settings from the environment with command-line overrides applied.
    pub fn settings(&self) -> Settings {
        self.apply_overrides(Settings::from_env())
    }

    fn apply_overrides(&self, mut settings: Settings) -> Settings {
        let overrides = [
            (&self.api_key, &mut settings.api_key),
            (&self.base_url, &mut settings.base_url),
            (&self.endpoint, &mut settings.endpoint),
            (&self.model, &mut settings.model),
            (&self.temperature, &mut settings.temperature),
            (&self.target_folder, &mut settings.target_folder),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
        settings
    }
}
