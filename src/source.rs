//! Line sources: discovery and reading of catalog text files.
//!
//! A source is any `.txt` file (case-insensitive extension) in the input
//! directory. Reading yields the trimmed, non-empty lines in order — the
//! contract the parser expects. Read or decode failures surface as
//! [`SourceError`]s for the caller to log and skip.

use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Discover catalog sources in `dir`: every `.txt` file, sorted by file
/// name so runs are deterministic regardless of directory iteration order.
pub fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let entries = std::fs::read_dir(dir).map_err(|source| SourceError::Scan {
        path: dir.display().to_string(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::Scan {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Read a source into trimmed, non-empty lines, preserving order.
///
/// The file must be valid UTF-8; a decode failure is reported rather than
/// lossily repaired, since a mangled glyph column is worse than a skipped
/// source.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| SourceError::Decode {
        path: path.display().to_string(),
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// The source's display identifier: its file name.
pub fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
