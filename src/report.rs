//! Summary and log file output.
//!
//! Every run writes `<basename>_summary.md` with the model's answer (think
//! tags removed) and `<basename>.log` with the request details and the raw,
//! unmodified answer. Existing files are overwritten.

use crate::error::Result;
use chrono::{DateTime, Local};
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Timestamp format used in both output files.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn think_tag_regex() -> &'static Regex {
    static THINK_TAG: OnceLock<Regex> = OnceLock::new();
    THINK_TAG.get_or_init(|| Regex::new(r"(?s)<think>.*?</think>").expect("Invalid regex"))
}

/// Remove every `<think>...</think>` span, including its content.
///
/// Matching is non-greedy and spans newlines. An opening tag without a
/// closing tag is left as is.
pub fn strip_think_tags(text: &str) -> Cow<'_, str> {
    think_tag_regex().replace_all(text, "")
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Path of the summary file for a transcript.
pub fn summary_path(folder: &Path, basename: &str) -> PathBuf {
    folder.join(format!("{}_summary.md", basename))
}

/// Path of the log file for a transcript.
pub fn log_path(folder: &Path, basename: &str) -> PathBuf {
    folder.join(format!("{}.log", basename))
}

/// Path of the raw response dump for a transcript.
pub fn response_path(folder: &Path, basename: &str) -> PathBuf {
    folder.join(format!("{}_response.json", basename))
}

/// Details recorded in the log file.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub model: &'a str,
    /// Temperature exactly as configured.
    pub temperature: &'a str,
    /// User prompt template, without the transcript.
    pub user_prompt: &'a str,
    /// Raw completion text.
    pub completion: &'a str,
}

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub log: PathBuf,
}

/// Render the summary file content.
pub fn render_summary(completion: &str, at: &DateTime<Local>) -> String {
    format!(
        "{}\n Summary generated at {}\n",
        strip_think_tags(completion),
        format_timestamp(at)
    )
}

/// Render the log file content.
pub fn render_log(basename: &str, record: &LogRecord<'_>, at: &DateTime<Local>) -> String {
    let mut log = String::new();
    log.push_str(&format!(
        "# {} meeting summary processed on {}\n",
        basename,
        format_timestamp(at)
    ));
    log.push_str(&format!(
        "by {} with temperature {}\n",
        record.model, record.temperature
    ));
    log.push_str(&format!("with user prompt: \n {}\n", record.user_prompt));
    log.push_str("Answer:\n");
    log.push_str(record.completion);
    log
}

/// Write `<basename>_summary.md` into `folder`.
pub fn write_summary(
    folder: &Path,
    basename: &str,
    completion: &str,
    at: &DateTime<Local>,
) -> Result<PathBuf> {
    let path = summary_path(folder, basename);
    std::fs::write(&path, render_summary(completion, at))?;
    debug!("Wrote summary to {:?}", path);
    Ok(path)
}

/// Write `<basename>.log` into `folder`.
pub fn write_log(
    folder: &Path,
    basename: &str,
    record: &LogRecord<'_>,
    at: &DateTime<Local>,
) -> Result<PathBuf> {
    let path = log_path(folder, basename);
    std::fs::write(&path, render_log(basename, record, at))?;
    debug!("Wrote log to {:?}", path);
    Ok(path)
}

/// Write both the summary and the log.
///
/// Both writes are attempted even if the first fails; the first error is
/// returned afterwards.
pub fn write_outputs(
    folder: &Path,
    basename: &str,
    record: &LogRecord<'_>,
    at: &DateTime<Local>,
) -> Result<OutputPaths> {
    let summary = write_summary(folder, basename, record.completion, at);
    let log = write_log(folder, basename, record, at);

    Ok(OutputPaths {
        summary: summary?,
        log: log?,
    })
}

/// Write the full response body as pretty JSON, for local debugging.
pub fn write_raw_response(
    folder: &Path,
    basename: &str,
    response: &serde_json::Value,
) -> Result<PathBuf> {
    let path = response_path(folder, basename);
    std::fs::write(&path, serde_json::to_string_pretty(response)?)?;
    debug!("Wrote raw response to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 2).unwrap()
    }

    fn record(completion: &str) -> LogRecord<'_> {
        LogRecord {
            model: "qwen3",
            temperature: "0.6",
            user_prompt: "Summarize this meeting:",
            completion,
        }
    }

    #[test]
    fn test_strip_single_think_tag() {
        assert_eq!(
            strip_think_tags("Hello <think>internal reasoning</think> world"),
            "Hello  world"
        );
    }

    #[test]
    fn test_strip_multiple_multiline_think_tags() {
        let text = "<think>\nstep 1\nstep 2\n</think>Intro\n<think>more</think>Outro";
        assert_eq!(strip_think_tags(text), "Intro\nOutro");
    }

    #[test]
    fn test_strip_is_non_greedy() {
        let text = "a<think>x</think>b<think>y</think>c";
        assert_eq!(strip_think_tags(text), "abc");
    }

    #[test]
    fn test_unterminated_think_tag_is_kept() {
        let text = "Start <think>never closed";
        assert_eq!(strip_think_tags(text), text);
    }

    #[test]
    fn test_text_without_tags_is_unchanged() {
        let text = "## Summary\n- decided things";
        assert!(matches!(strip_think_tags(text), Cow::Borrowed(_)));
        assert_eq!(strip_think_tags(text), text);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&fixed_time()), "2024-03-05 09:07:02");
    }

    #[test]
    fn test_render_summary_appends_timestamp() {
        let summary = render_summary("Hello <think>internal reasoning</think> world", &fixed_time());
        assert_eq!(
            summary,
            "Hello  world\n Summary generated at 2024-03-05 09:07:02\n"
        );
    }

    #[test]
    fn test_render_log_keeps_raw_completion() {
        let completion = "<think>plan</think>Result";
        let log = render_log("standup", &record(completion), &fixed_time());

        assert_eq!(
            log,
            "# standup meeting summary processed on 2024-03-05 09:07:02\n\
             by qwen3 with temperature 0.6\n\
             with user prompt: \n Summarize this meeting:\n\
             Answer:\n\
             <think>plan</think>Result"
        );
    }

    #[test]
    fn test_write_outputs_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let at = fixed_time();

        write_outputs(dir.path(), "standup", &record("first <think>a</think>run"), &at).unwrap();
        let paths =
            write_outputs(dir.path(), "standup", &record("second <think>b</think>run"), &at)
                .unwrap();

        assert_eq!(paths.summary, dir.path().join("standup_summary.md"));
        assert_eq!(paths.log, dir.path().join("standup.log"));

        let summary = std::fs::read_to_string(&paths.summary).unwrap();
        assert_eq!(summary, "second run\n Summary generated at 2024-03-05 09:07:02\n");

        let log = std::fs::read_to_string(&paths.log).unwrap();
        assert!(log.ends_with("Answer:\nsecond <think>b</think>run"));
        assert!(!log.contains("first"));
    }

    #[test]
    fn test_write_outputs_attempts_log_when_summary_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the summary file makes that write fail.
        std::fs::create_dir(summary_path(dir.path(), "standup")).unwrap();

        let result = write_outputs(dir.path(), "standup", &record("text"), &fixed_time());

        assert!(result.is_err());
        assert!(log_path(dir.path(), "standup").is_file());
    }

    #[test]
    fn test_write_raw_response() {
        let dir = tempfile::tempdir().unwrap();
        let body = serde_json::json!({"choices": [{"message": {"content": "hi"}}]});

        let path = write_raw_response(dir.path(), "standup", &body).unwrap();
        assert_eq!(path, dir.path().join("standup_response.json"));

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved, body);
    }
}
