//! Summarize the latest transcript in the target folder.

use super::{Cli, Output};
use crate::config::{Prompts, Settings};
use crate::orchestrator::Orchestrator;
use anyhow::{Context, Result};

/// Run the summarizer once.
pub async fn run_summarize(cli: &Cli, settings: Settings) -> Result<()> {
    let prompts = Prompts::load(&cli.prompts_dir).with_context(|| {
        format!("Failed to load prompts from {}", cli.prompts_dir.display())
    })?;

    let orchestrator = Orchestrator::new(settings, prompts).with_save_response(cli.save_response);

    let transcript = orchestrator.select_transcript()?;
    Output::info(&format!("Processing {}", transcript.path.display()));

    if cli.print_transcript {
        println!("{}", transcript.content);
    }

    let settings = orchestrator.settings();
    Output::kv("Endpoint", &settings.request_url());
    Output::kv("Model", &settings.model);

    let spinner = Output::spinner("Waiting for the model...");
    let result = orchestrator.summarize(&transcript).await;
    spinner.finish_and_clear();
    let outcome = result?;

    Output::success(&format!("Summary written to {}", outcome.summary_path.display()));
    Output::kv("Log", &outcome.log_path.display().to_string());
    if let Some(path) = &outcome.response_path {
        Output::kv("Response", &path.display().to_string());
    }

    Ok(())
}
