//! The catalog parse pass: raw lines into deduplicated sign records.
//!
//! Sources are processed strictly sequentially. The dedup set is shared
//! across every source of a run so "first occurrence wins" is well-defined;
//! the current category resets at each source boundary. Construct a fresh
//! parser per run — the dedup state is owned by the instance, never global.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::record::SignRecord;

/// Accumulating parser over an ordered sequence of catalog sources.
///
/// Feed each source with [`parse_source`](Self::parse_source) in the order
/// they should be observed, then take the result with
/// [`into_records`](Self::into_records).
#[derive(Debug, Default)]
pub struct CatalogParser {
    records: Vec<SignRecord>,
    seen_codes: HashSet<String>,
}

impl CatalogParser {
    /// Create a parser with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one source worth of trimmed, non-empty lines.
    ///
    /// `source_id` is the source's name (e.g. its file name); with no
    /// category header seen yet, records fall back to the name with its
    /// extension stripped.
    ///
    /// The scan applies two rules per cursor position:
    ///
    /// - a line containing a `-` and no ASCII decimal digit anywhere is a
    ///   category header (this is the whole test — it is a heuristic, and
    ///   it will claim any digit-free hyphenated code line too; only ASCII
    ///   digits veto it, so a hyphenated line with e.g. Arabic-Indic
    ///   digits still classifies as a header);
    /// - otherwise the line pairs with its successor: current line is the
    ///   code, the next line splits at the first whitespace run into glyph
    ///   and optional description.
    ///
    /// A final line with no pairing partner is dropped; no record is made
    /// from half a pair. Duplicate codes (within or across sources) keep
    /// the first occurrence and drop the rest.
    pub fn parse_source(&mut self, source_id: &str, lines: &[String]) {
        let fallback = fallback_category(source_id);
        let mut current_category: Option<&str> = None;
        let mut i = 0;

        while i < lines.len() {
            let line = &lines[i];

            if line.contains('-') && !line.chars().any(|ch| ch.is_ascii_digit()) {
                current_category = Some(line.as_str());
                i += 1;
                continue;
            }

            let Some(glyph_line) = lines.get(i + 1) else {
                // Dangling line at end of source; no partner, no record.
                i += 1;
                continue;
            };

            let code = line.clone();
            let (glyph, description) = split_glyph_line(glyph_line);

            if self.seen_codes.contains(&code) {
                tracing::debug!(code = %code, source = source_id, "duplicate code dropped");
            } else {
                let category = current_category.unwrap_or(fallback.as_str()).to_string();
                self.seen_codes.insert(code.clone());
                self.records
                    .push(SignRecord::new(category, code, glyph, description));
            }

            i += 2;
        }
    }

    /// Records accumulated so far, in first-seen order.
    pub fn records(&self) -> &[SignRecord] {
        &self.records
    }

    /// Number of records accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records have been produced yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finish the run, yielding all records in first-seen order.
    pub fn into_records(self) -> Vec<SignRecord> {
        self.records
    }
}

/// Split a glyph line at the first whitespace run: glyph token, then the
/// remainder as description (empty if absent).
fn split_glyph_line(glyph_line: &str) -> (String, String) {
    match glyph_line.split_once(char::is_whitespace) {
        Some((glyph, rest)) => (glyph.to_string(), rest.trim_start().to_string()),
        None => (glyph_line.to_string(), String::new()),
    }
}

/// Derive the fallback category from a source name: the name with its
/// extension stripped.
fn fallback_category(source_id: &str) -> String {
    Path::new(source_id)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_id.to_string())
}

/// Group records by category, preserving first-seen order of both the
/// groups and the records within each group.
pub fn group_by_category(records: &[SignRecord]) -> Vec<(&str, Vec<&SignRecord>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: Vec<Vec<&SignRecord>> = Vec::new();
    for record in records {
        match order.iter().position(|cat| *cat == record.category) {
            Some(idx) => groups[idx].push(record),
            None => {
                order.push(&record.category);
                groups.push(vec![record]);
            }
        }
    }
    order.into_iter().zip(groups).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn category_switch_groups_records() {
        let mut parser = CatalogParser::new();
        parser.parse_source(
            "signs.txt",
            &lines(&[
                "Cat-A",
                "C1",
                "\u{13000} foo",
                "C2",
                "\u{13080} bar",
                "Cat-B",
                "C3",
                "\u{130C0} baz",
            ]),
        );
        let records = parser.into_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].code, "C1");
        assert_eq!(records[0].category, "Cat-A");
        assert_eq!(records[1].code, "C2");
        assert_eq!(records[1].category, "Cat-A");
        assert_eq!(records[2].code, "C3");
        assert_eq!(records[2].category, "Cat-B");
    }

    #[test]
    fn no_header_falls_back_to_source_name() {
        let mut parser = CatalogParser::new();
        parser.parse_source("birds.txt", &lines(&["G1", "\u{13140} vulture"]));
        let records = parser.into_records();
        assert_eq!(records[0].category, "birds");
    }

    #[test]
    fn header_heuristic_boundary() {
        // "A1-2" has a hyphen but also digits: it is a code, not a header.
        let mut parser = CatalogParser::new();
        parser.parse_source(
            "signs.txt",
            &lines(&["A1-2", "\u{13000}", "Birds-Category", "G1", "\u{13140}"]),
        );
        let records = parser.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "A1-2");
        assert_eq!(records[0].category, "signs");
        assert_eq!(records[1].code, "G1");
        assert_eq!(records[1].category, "Birds-Category");
    }

    #[test]
    fn only_ascii_digits_veto_the_header_test() {
        // "A\u{0663}-x" carries an Arabic-Indic digit; only ASCII digits
        // count, so the line is a header, not a code.
        let mut parser = CatalogParser::new();
        parser.parse_source(
            "signs.txt",
            &lines(&["A\u{0663}-x", "B1", "\u{13050}"]),
        );
        let records = parser.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "B1");
        assert_eq!(records[0].category, "A\u{0663}-x");
    }

    #[test]
    fn dedup_across_sources_first_wins() {
        let mut parser = CatalogParser::new();
        parser.parse_source("first.txt", &lines(&["A1", "\u{13000} seated man"]));
        parser.parse_source("second.txt", &lines(&["A1", "\u{13001} divergent", "B1", "\u{13050}"]));
        let records = parser.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "A1");
        assert_eq!(records[0].glyph, "\u{13000}");
        assert_eq!(records[0].category, "first");
        assert_eq!(records[1].code, "B1");
    }

    #[test]
    fn same_source_twice_is_idempotent() {
        let src = lines(&["Cat-A", "A1", "\u{13000} one", "A2", "\u{13001} two"]);
        let mut parser = CatalogParser::new();
        parser.parse_source("a.txt", &src);
        let first_pass = parser.len();
        parser.parse_source("a.txt", &src);
        let records = parser.into_records();
        assert_eq!(records.len(), first_pass);
    }

    #[test]
    fn dangling_line_is_dropped() {
        let mut parser = CatalogParser::new();
        parser.parse_source("a.txt", &lines(&["A1", "\u{13000}", "A2"]));
        let records = parser.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "A1");
    }

    #[test]
    fn description_split_at_first_whitespace() {
        let mut parser = CatalogParser::new();
        parser.parse_source("a.txt", &lines(&["A1", "\u{13000} seated man", "A2", "\u{13001}"]));
        let records = parser.into_records();
        assert_eq!(records[0].glyph, "\u{13000}");
        assert_eq!(records[0].description, "seated man");
        assert_eq!(records[1].description, "");
    }

    #[test]
    fn category_resets_between_sources() {
        let mut parser = CatalogParser::new();
        parser.parse_source("a.txt", &lines(&["Cat-A", "A1", "\u{13000}"]));
        parser.parse_source("b.txt", &lines(&["B1", "\u{13050}"]));
        let records = parser.into_records();
        assert_eq!(records[1].category, "b");
    }

    #[test]
    fn empty_source_produces_nothing() {
        let mut parser = CatalogParser::new();
        parser.parse_source("empty.txt", &[]);
        assert!(parser.is_empty());
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let mut parser = CatalogParser::new();
        parser.parse_source(
            "a.txt",
            &lines(&[
                "Cat-B",
                "B1",
                "\u{13050}",
                "Cat-A",
                "A1",
                "\u{13000}",
                "Cat-B",
                "B2",
                "\u{13051}",
            ]),
        );
        let records = parser.into_records();
        let groups = group_by_category(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Cat-B");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Cat-A");
    }
}
