//! Zip bundling of produced output files.
//!
//! Entry names are paths relative to the output root. Paths that no longer
//! exist are skipped with a warning — a missing sink output must not sink
//! the archive too.

use std::io::Write;
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::ArchiveError;

/// Bundle `files` into a zip at `zip_path`, returning the archive size in
/// bytes.
pub fn build_archive(zip_path: &Path, root: &Path, files: &[PathBuf]) -> Result<u64, ArchiveError> {
    let create_err = |source: std::io::Error| ArchiveError::Create {
        path: zip_path.display().to_string(),
        source,
    };

    let file = std::fs::File::create(zip_path).map_err(create_err)?;
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "missing output skipped in archive");
            continue;
        }
        let entry = entry_name(path, root);
        let bytes = std::fs::read(path).map_err(|err| ArchiveError::Append {
            entry: entry.clone(),
            message: err.to_string(),
        })?;
        writer
            .start_file(entry.clone(), options)
            .map_err(|err| ArchiveError::Append {
                entry: entry.clone(),
                message: err.to_string(),
            })?;
        writer.write_all(&bytes).map_err(|err| ArchiveError::Append {
            entry,
            message: err.to_string(),
        })?;
    }

    let file = writer.finish().map_err(|err| ArchiveError::Append {
        entry: zip_path.display().to_string(),
        message: err.to_string(),
    })?;
    let size = file.metadata().map_err(create_err)?.len();
    Ok(size)
}

/// Archive entry name: path relative to the output root, `/`-separated.
fn entry_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
