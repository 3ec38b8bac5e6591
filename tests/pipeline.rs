//! End-to-end tests for the sign-catalog pipeline.
//!
//! These exercise the full run over a temporary input tree: parsing with
//! cross-source dedup, placeholder image rendering, the JSON/CSV sinks,
//! the zip archive, and the summary report.

use std::path::Path;

use sesh_medu::config::PipelineConfig;
use sesh_medu::{export, pipeline};

fn write_source(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

fn test_config(input: &Path, output: &Path) -> PipelineConfig {
    PipelineConfig {
        input_dir: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        image_size: 64,
        // Empty font list: the renderer falls back to placeholder boxes,
        // keeping the test independent of installed fonts.
        font_paths: Vec::new(),
        ..Default::default()
    }
}

#[test]
fn full_run_produces_all_artifacts() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();

    write_source(
        input.path(),
        "a_signs.txt",
        "Man-Signs\nA1\n\u{13000} seated man\nA2\n\u{13001} man with hand to mouth\n",
    );
    write_source(
        input.path(),
        "b_signs.txt",
        "Bird-Signs\nG1\n\u{13140} vulture\nA1\n\u{13002} divergent duplicate\n",
    );

    let config = test_config(input.path(), output.path());
    let summary = pipeline::run(&config).unwrap();

    assert_eq!(summary.sources_processed, 2);
    assert_eq!(summary.records_produced, 3); // A1 deduped across sources
    assert_eq!(summary.images_produced, 3);
    assert!(summary.archive_bytes > 0);

    // Master JSON holds the deduplicated set in first-seen order.
    let records = export::load_records(&output.path().join("Signs_Master.json")).unwrap();
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["A1", "A2", "G1"]);
    assert_eq!(records[0].glyph, "\u{13000}"); // first occurrence won
    assert_eq!(records[0].category, "Man-Signs");
    assert_eq!(records[0].code_points, vec!["U+13000"]);

    // Per-category outputs, with safe filenames.
    assert!(output
        .path()
        .join("signs_by_category_json/Man_Signs.json")
        .exists());
    assert!(output
        .path()
        .join("signs_by_category_csv/Bird_Signs.csv")
        .exists());

    // One image per record.
    for code in ["A1", "A2", "G1"] {
        assert!(output.path().join(format!("glyph_images/{code}.png")).exists());
    }

    // Archive and report.
    assert!(output.path().join("Signs_Archive.zip").exists());
    let report = std::fs::read_to_string(output.path().join("Summary_Report.txt")).unwrap();
    assert!(report.contains("Records produced:  3"));
}

#[test]
fn headerless_source_uses_file_stem_category() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();

    write_source(input.path(), "birds.txt", "G1\n\u{13140} vulture\n");

    let config = test_config(input.path(), output.path());
    pipeline::run(&config).unwrap();

    let records = export::load_records(&output.path().join("Signs_Master.json")).unwrap();
    assert_eq!(records[0].category, "birds");
    assert!(output
        .path()
        .join("signs_by_category_json/birds.json")
        .exists());
}

#[test]
fn unreadable_source_is_skipped_not_fatal() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();

    write_source(input.path(), "good.txt", "A1\n\u{13000} seated man\n");
    // Invalid UTF-8: decoded sources only.
    std::fs::write(input.path().join("bad.txt"), [0xFF, 0xFE, 0x00]).unwrap();

    let config = test_config(input.path(), output.path());
    let summary = pipeline::run(&config).unwrap();

    assert_eq!(summary.sources_processed, 1);
    assert_eq!(summary.records_produced, 1);
}

#[test]
fn failing_image_write_leaves_other_sinks_intact() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();

    // "A/1" contains a path separator, so its image path lands in a
    // nonexistent subdirectory and the write fails mid-run.
    write_source(
        input.path(),
        "signs.txt",
        "A/1\n\u{13000} seated man\nB1\n\u{13050} leg\n",
    );

    let config = test_config(input.path(), output.path());
    let summary = pipeline::run(&config).unwrap();

    // The failed image is skipped; every other stage still completes.
    assert_eq!(summary.records_produced, 2);
    assert_eq!(summary.images_produced, 1);
    assert!(output.path().join("glyph_images/B1.png").exists());
    assert!(summary.archive_bytes > 0);

    let records = export::load_records(&output.path().join("Signs_Master.json")).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, "A/1");
}

#[test]
fn second_run_without_overwrite_renders_nothing_new() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();

    write_source(input.path(), "signs.txt", "A1\n\u{13000}\nA2\n\u{13001}\n");

    let config = test_config(input.path(), output.path());
    let first = pipeline::run(&config).unwrap();
    assert_eq!(first.images_produced, 2);

    let second = pipeline::run(&config).unwrap();
    assert_eq!(second.records_produced, 2);
    assert_eq!(second.images_produced, 0);
}

#[test]
fn empty_input_directory_yields_empty_but_valid_outputs() {
    let input = tempfile::TempDir::new().unwrap();
    let output = tempfile::TempDir::new().unwrap();

    let config = test_config(input.path(), output.path());
    let summary = pipeline::run(&config).unwrap();

    assert_eq!(summary.sources_processed, 0);
    assert_eq!(summary.records_produced, 0);
    let records = export::load_records(&output.path().join("Signs_Master.json")).unwrap();
    assert!(records.is_empty());
}

#[test]
fn missing_input_directory_fails_validation() {
    let output = tempfile::TempDir::new().unwrap();
    let config = test_config(Path::new("/nonexistent/signs"), output.path());
    assert!(pipeline::run(&config).is_err());
}
