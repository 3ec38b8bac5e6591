//! Pipeline orchestration: discover → parse → render → export → archive →
//! summarize.
//!
//! The parse pass is the only stage with real logic; everything after it is
//! a sink. Sinks are independent: each failure is logged and the remaining
//! sinks still run, so one bad write never corrupts or hides the rest of
//! the output.

use std::path::PathBuf;

use crate::catalog::{CatalogParser, SignRecord, group_by_category};
use crate::config::PipelineConfig;
use crate::error::{ConfigError, SeshResult};
use crate::render::GlyphRenderer;
use crate::source;
use crate::summary::RunSummary;
use crate::{archive, export};

/// Name of the aggregate JSON output.
pub const MASTER_JSON: &str = "Signs_Master.json";
/// Name of the zip archive output.
pub const ARCHIVE_NAME: &str = "Signs_Archive.zip";
/// Name of the summary report output.
pub const SUMMARY_NAME: &str = "Summary_Report.txt";

/// Discover and parse all sources under the configured input directory.
///
/// Returns the number of sources successfully read along with the
/// deduplicated record set. An unreadable source is logged and skipped;
/// it never aborts the remaining sources.
pub fn parse_sources(config: &PipelineConfig) -> SeshResult<(usize, Vec<SignRecord>)> {
    let sources = source::discover_sources(&config.input_dir)?;
    tracing::info!(
        input = %config.input_dir.display(),
        sources = sources.len(),
        "parsing catalog sources"
    );

    let mut parser = CatalogParser::new();
    let mut processed = 0;
    for path in &sources {
        let id = source::source_id(path);
        match source::read_lines(path) {
            Ok(lines) => {
                parser.parse_source(&id, &lines);
                processed += 1;
            }
            Err(err) => {
                tracing::error!(source = %id, error = %err, "source skipped");
            }
        }
    }

    let records = parser.into_records();
    tracing::info!(records = records.len(), "parse pass complete");
    Ok((processed, records))
}

/// Run the full pipeline, returning the final counters.
pub fn run(config: &PipelineConfig) -> SeshResult<RunSummary> {
    config.validate()?;
    let (sources_processed, records) = parse_sources(config)?;

    prepare_output_dirs(config)?;

    let images_produced = render_images(config, &records);
    let produced = export_records(config, &records);
    let archive_bytes = bundle(config, &produced);

    let summary = RunSummary {
        sources_processed,
        records_produced: records.len(),
        images_produced,
        archive_bytes,
    };

    let report_path = config.output_dir.join(SUMMARY_NAME);
    if let Err(err) = summary.write_report(&report_path) {
        tracing::error!(error = %err, "summary report not written");
    }

    Ok(summary)
}

fn prepare_output_dirs(config: &PipelineConfig) -> Result<(), ConfigError> {
    for dir in [
        config.output_dir.clone(),
        config.images_dir(),
        config.category_json_dir(),
        config.category_csv_dir(),
    ] {
        std::fs::create_dir_all(&dir).map_err(|source| ConfigError::OutputDir {
            path: dir.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// Render one placeholder image per record. Returns the number of images
/// newly written; per-glyph failures are logged and skipped.
fn render_images(config: &PipelineConfig, records: &[SignRecord]) -> usize {
    let renderer = GlyphRenderer::new(
        config.image_size,
        config.font_size,
        config.overwrite,
        &config.font_paths,
    );
    let images_dir = config.images_dir();
    tracing::info!(count = records.len(), dir = %images_dir.display(), "rendering glyph images");

    let mut produced = 0;
    for record in records {
        let path = images_dir.join(format!("{}.png", record.code));
        match renderer.render(&record.glyph, &path) {
            Ok(true) => produced += 1,
            Ok(false) => {}
            Err(err) => {
                tracing::error!(code = %record.code, error = %err, "glyph image skipped");
            }
        }
    }
    produced
}

/// Run every serialization sink, returning the paths that were actually
/// produced (for the archive).
fn export_records(config: &PipelineConfig, records: &[SignRecord]) -> Vec<PathBuf> {
    let mut produced = Vec::new();

    let master = config.output_dir.join(MASTER_JSON);
    match export::write_master_json(&master, records) {
        Ok(()) => produced.push(master),
        Err(err) => tracing::error!(error = %err, "master JSON not written"),
    }

    let json_dir = config.category_json_dir();
    let csv_dir = config.category_csv_dir();
    for (category, group) in group_by_category(records) {
        match export::write_category_json(&json_dir, category, &group) {
            Ok(path) => produced.push(path),
            Err(err) => {
                tracing::error!(category, error = %err, "category JSON not written");
            }
        }
        match export::write_category_csv(&csv_dir, category, &group) {
            Ok(path) => produced.push(path),
            Err(err) => {
                tracing::error!(category, error = %err, "category CSV not written");
            }
        }
    }

    tracing::info!(files = produced.len(), "exports complete");
    produced
}

/// Bundle the produced outputs; returns the archive size, or 0 when
/// archiving failed (logged, non-fatal).
fn bundle(config: &PipelineConfig, produced: &[PathBuf]) -> u64 {
    let zip_path = config.output_dir.join(ARCHIVE_NAME);
    match archive::build_archive(&zip_path, &config.output_dir, produced) {
        Ok(size) => {
            tracing::info!(path = %zip_path.display(), bytes = size, "archive sealed");
            size
        }
        Err(err) => {
            tracing::error!(error = %err, "archive not written");
            0
        }
    }
}
