//! CLI command implementations

pub mod guess;
pub mod names;

use anyhow::{Context, Result};
use rawvid_guess::FileInfoForGuess;
use std::fmt::Display;
use std::path::Path;

/// Collect name and size evidence for `path`.
///
/// `size` replaces the size on disk when given, so files that do not exist
/// locally can still be checked.
pub fn file_info(path: &Path, size: Option<u64>) -> Result<FileInfoForGuess> {
    let info = FileInfoForGuess::from_path(path)
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    Ok(match size {
        Some(size) => info.with_file_size(Some(size)),
        None => info,
    })
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bytes {
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{b} B"),
    }
}

/// Value or `-` when not guessed.
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
