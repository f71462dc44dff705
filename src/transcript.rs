//! Transcript selection.
//!
//! Picks the most recently modified transcript in a folder and reads it.

use crate::error::{RecapError, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Recognized transcript extensions, matched case-insensitively.
const TRANSCRIPT_EXTENSIONS: &[&str] = &[".txt", ".srt", ".md"];

/// A transcript loaded from disk.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// Path of the source file.
    pub path: PathBuf,
    /// File name without its final extension, used to name the outputs.
    pub basename: String,
    /// Full text content.
    pub content: String,
}

impl Transcript {
    /// Read a transcript file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            basename,
            content,
        })
    }

    /// Folder the transcript lives in, where the outputs are written.
    pub fn folder(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// File name for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Check if a file name carries a transcript extension.
pub fn has_transcript_extension(name: &str) -> bool {
    let name = name.to_lowercase();
    TRANSCRIPT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Find the most recently modified transcript in `folder`.
///
/// Entries whose name lacks a transcript extension are never considered, no
/// matter how recent. When two candidates share a modification time the one
/// listed first wins; listing order is platform-defined.
pub fn find_latest(folder: &Path) -> Result<PathBuf> {
    let mut latest: Option<(PathBuf, SystemTime)> = None;

    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        if !has_transcript_extension(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let metadata = std::fs::metadata(&path)?;
        if !metadata.is_file() {
            debug!("Skipping non-file entry {:?}", path);
            continue;
        }

        let modified = metadata.modified()?;
        match &latest {
            Some((_, newest)) if *newest >= modified => {}
            _ => latest = Some((path, modified)),
        }
    }

    latest
        .map(|(path, _)| path)
        .ok_or_else(|| RecapError::NoTranscriptFound {
            folder: folder.to_path_buf(),
        })
}

/// Find and read the most recently modified transcript in `folder`.
pub fn load_latest(folder: &Path) -> Result<Transcript> {
    let path = find_latest(folder)?;
    debug!("Selected transcript {:?}", path);
    Transcript::load(&path)
}
