//! Serialization sinks: master JSON, per-category JSON and CSV, and the
//! regenerated plain-text catalog.
//!
//! Every sink is independent: a failure in one is reported by the caller
//! and must not stop the others. Field names and layout follow
//! [`SignRecord`](crate::catalog::SignRecord) exactly.

use std::path::{Path, PathBuf};

use crate::catalog::SignRecord;
use crate::error::ExportError;

/// CSV header row: the record fields in declaration order.
const CSV_HEADER: [&str; 6] = [
    "category",
    "code",
    "glyph",
    "code_points",
    "escaped_form",
    "description",
];

/// Category name made safe for filenames: spaces and hyphens become `_`.
pub fn safe_category_name(category: &str) -> String {
    category.replace([' ', '-'], "_")
}

/// Write the full record set as pretty JSON.
pub fn write_master_json(path: &Path, records: &[SignRecord]) -> Result<(), ExportError> {
    write_json(path, records)
}

/// Write one category's records as pretty JSON under `dir`, returning the
/// produced path.
pub fn write_category_json(
    dir: &Path,
    category: &str,
    records: &[&SignRecord],
) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{}.json", safe_category_name(category)));
    write_json(&path, records)?;
    Ok(path)
}

/// Write one category's records as CSV under `dir`, header row first,
/// `code_points` joined by single spaces. Returns the produced path.
pub fn write_category_csv(
    dir: &Path,
    category: &str,
    records: &[&SignRecord],
) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{}.csv", safe_category_name(category)));
    let mut writer = csv::Writer::from_path(&path).map_err(|err| ExportError::Csv {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    let csv_err = |err: csv::Error| ExportError::Csv {
        path: path.display().to_string(),
        message: err.to_string(),
    };

    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for record in records {
        let points = record.code_points.join(" ");
        writer
            .write_record([
                record.category.as_str(),
                record.code.as_str(),
                record.glyph.as_str(),
                points.as_str(),
                record.escaped_form.as_str(),
                record.description.as_str(),
            ])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

/// Load a previously written master JSON back into records.
pub fn load_records(path: &Path) -> Result<Vec<SignRecord>, ExportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|err| ExportError::Json {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Regenerate a human-readable catalog: `=== Category ===` headers, one
/// tab-separated `code\tglyph\tdescription` line per record, blank line
/// between categories.
pub fn write_catalog_text(path: &Path, records: &[SignRecord]) -> Result<(), ExportError> {
    let mut out = String::new();
    for (category, group) in crate::catalog::group_by_category(records) {
        out.push_str(&format!("=== {category} ===\n"));
        for record in group {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                record.code, record.glyph, record.description
            ));
        }
        out.push('\n');
    }
    std::fs::write(path, out).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(value).map_err(|err| ExportError::Json {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}
