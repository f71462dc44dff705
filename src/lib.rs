//! Recap - Meeting transcript summarizer
//!
//! Picks the most recently modified transcript in a folder, asks an
//! OpenAI-compatible LLM server to summarize it, and writes the summary and an
//! audit log next to the transcript.
//!
//! # Architecture
//!
//! - `config` - Environment settings and YAML prompt loading
//! - `transcript` - Latest-transcript selection
//! - `llm` - Chat completion requests
//! - `report` - Think-tag stripping, summary and log files
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use recap::config::{Prompts, Settings};
//! use recap::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_env();
//!     let prompts = Prompts::load(std::path::Path::new("prompts"))?;
//!
//!     let outcome = Orchestrator::new(settings, prompts).run().await?;
//!     println!("Wrote {}", outcome.summary_path.display());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod openai;
pub mod orchestrator;
pub mod report;
pub mod transcript;

pub use error::{RecapError, Result};
