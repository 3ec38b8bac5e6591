//! Run summary: counters collected across the pipeline stages and the
//! fixed-format report rendered from them.

use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;

/// Counters for one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Sources successfully read and parsed.
    pub sources_processed: usize,
    /// Records in the final deduplicated set.
    pub records_produced: usize,
    /// Placeholder images newly written this run.
    pub images_produced: usize,
    /// Size of the zip archive in bytes (0 if archiving failed).
    pub archive_bytes: u64,
}

impl RunSummary {
    /// The fixed-format human-readable report.
    pub fn report(&self) -> String {
        format!(
            "\n=== Sign Catalog Summary ===\n\
             Sources processed: {}\n\
             Records produced:  {}\n\
             Images produced:   {}\n\
             Archive size:      {:.2} MB\n\
             ============================\n",
            self.sources_processed,
            self.records_produced,
            self.images_produced,
            self.archive_bytes as f64 / (1024.0 * 1024.0),
        )
    }

    /// Write the report to `path`.
    pub fn write_report(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.report()).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_fixed_layout() {
        let summary = RunSummary {
            sources_processed: 3,
            records_produced: 42,
            images_produced: 40,
            archive_bytes: 2 * 1024 * 1024 + 512 * 1024,
        };
        let report = summary.report();
        assert!(report.contains("Sources processed: 3"));
        assert!(report.contains("Records produced:  42"));
        assert!(report.contains("Images produced:   40"));
        assert!(report.contains("Archive size:      2.50 MB"));
    }

    #[test]
    fn write_report_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Summary_Report.txt");
        RunSummary::default().write_report(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("=== Sign Catalog Summary ==="));
        assert!(text.contains("Archive size:      0.00 MB"));
    }
}
