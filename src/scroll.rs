//! Text scroll rendering: a sequence of sign codes from the master record
//! set rendered as a glyph string.
//!
//! Pure over its inputs; loading the master JSON is the caller's job
//! (see [`crate::export::load_records`]).

use std::collections::HashMap;

use crate::catalog::SignRecord;

/// Placeholder printed for codes with no record.
const UNKNOWN: &str = "?";

/// Options for scroll rendering.
#[derive(Debug, Clone, Default)]
pub struct ScrollOptions {
    /// Stack glyphs vertically, one per line.
    pub vertical: bool,
    /// Optional title line printed before the glyphs.
    pub title: Option<String>,
}

/// Map codes to glyphs. Later duplicates cannot occur in a parsed record
/// set, but if fed hand-edited JSON the first occurrence wins here too.
pub fn sign_map(records: &[SignRecord]) -> HashMap<&str, &str> {
    let mut map = HashMap::new();
    for record in records {
        map.entry(record.code.as_str())
            .or_insert(record.glyph.as_str());
    }
    map
}

/// Render `codes` as a text scroll. Unknown codes render as `?`.
pub fn render_scroll(
    map: &HashMap<&str, &str>,
    codes: &[String],
    options: &ScrollOptions,
) -> String {
    let glyphs: Vec<&str> = codes
        .iter()
        .map(|code| map.get(code.as_str()).copied().unwrap_or(UNKNOWN))
        .collect();

    let mut out = String::new();
    if let Some(title) = &options.title {
        out.push_str(title);
        out.push('\n');
    }
    if options.vertical {
        out.push_str(&glyphs.join("\n"));
    } else {
        out.push_str(&glyphs.concat());
    }
    out
}
