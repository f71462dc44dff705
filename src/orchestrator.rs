//! Pipeline orchestrator for Recap.
//!
//! Coordinates the run from transcript selection to the written outputs.

use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::llm::{CompletionProvider, OpenAICompletion};
use crate::report::{self, LogRecord};
use crate::transcript::{self, Transcript};
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

/// Result of summarizing one transcript.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// Base name of the processed transcript.
    pub basename: String,
    pub summary_path: PathBuf,
    pub log_path: PathBuf,
    /// Raw response dump, when requested.
    pub response_path: Option<PathBuf>,
    /// Raw completion text, think tags included.
    pub completion: String,
}

/// The main orchestrator for the Recap pipeline.
pub struct Orchestrator {
    settings: Settings,
    prompts: Prompts,
    provider: Arc<dyn CompletionProvider>,
    save_response: bool,
}

impl Orchestrator {
    /// Create an orchestrator that talks to the configured server.
    pub fn new(settings: Settings, prompts: Prompts) -> Self {
        let provider = Arc::new(OpenAICompletion::new(&settings));
        Self::with_provider(settings, prompts, provider)
    }

    /// Create an orchestrator with a custom completion provider.
    pub fn with_provider(
        settings: Settings,
        prompts: Prompts,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            settings,
            prompts,
            provider,
            save_response: false,
        }
    }

    /// Also save the full response body next to the outputs.
    pub fn with_save_response(mut self, save_response: bool) -> Self {
        self.save_response = save_response;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Pick and read the latest transcript in the target folder.
    pub fn select_transcript(&self) -> Result<Transcript> {
        let folder = self.settings.target_folder_path();
        let transcript = transcript::load_latest(&folder)?;
        info!(
            "Selected transcript {} ({} chars)",
            transcript.file_name(),
            transcript.content.len()
        );
        Ok(transcript)
    }

    /// Summarize a transcript and write the summary and log files.
    #[instrument(skip(self, transcript), fields(transcript = %transcript.basename))]
    pub async fn summarize(&self, transcript: &Transcript) -> Result<SummaryOutcome> {
        let user_message = self.prompts.user_message(&transcript.content);
        let completion = self
            .provider
            .complete(&self.prompts.system, &user_message)
            .await?;

        let folder = transcript.folder();
        let record = LogRecord {
            model: self.provider.model(),
            temperature: &self.settings.temperature,
            user_prompt: &self.prompts.user,
            completion: &completion.text,
        };
        let paths = report::write_outputs(folder, &transcript.basename, &record, &Local::now());

        // The dump is attempted even when the required outputs failed.
        let response_path = match (&completion.raw, self.save_response) {
            (Some(raw), true) => Some(report::write_raw_response(
                folder,
                &transcript.basename,
                raw,
            )),
            _ => None,
        };

        let paths = paths?;
        let response_path = response_path.transpose()?;

        info!("Summary written to {:?}", paths.summary);

        Ok(SummaryOutcome {
            basename: transcript.basename.clone(),
            summary_path: paths.summary,
            log_path: paths.log,
            response_path,
            completion: completion.text,
        })
    }

    /// Run the whole pipeline once.
    pub async fn run(&self) -> Result<SummaryOutcome> {
        let transcript = self.select_transcript()?;
        self.summarize(&transcript).await
    }
}
