//! Structured sign records and their Unicode encodings.
//!
//! A [`SignRecord`] is the normalized output unit of the parse pass. Field
//! names here are the on-disk names: the JSON and CSV sinks serialize the
//! struct as-is, so renaming a field changes the output format.

use serde::{Deserialize, Serialize};

/// One normalized sign entry from a catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRecord {
    /// Category header in effect when the record was parsed, or the
    /// source's fallback name if no header had been seen yet.
    pub category: String,
    /// Unique identifier token (e.g. a Gardiner number like `A1`).
    pub code: String,
    /// The displayed symbol string, one or more Unicode scalars.
    pub glyph: String,
    /// Each scalar of `glyph` as `U+XXXX`, in left-to-right order.
    pub code_points: Vec<String>,
    /// ASCII-safe escaped form of `glyph`.
    pub escaped_form: String,
    /// Free text following the glyph token; empty if absent.
    pub description: String,
}

impl SignRecord {
    /// Build a record from the raw parse products, deriving the encoded
    /// fields from `glyph`.
    pub fn new(category: String, code: String, glyph: String, description: String) -> Self {
        let code_points = code_points(&glyph);
        let escaped_form = unicode_escape(&glyph);
        Self {
            category,
            code,
            glyph,
            code_points,
            escaped_form,
            description,
        }
    }
}

/// Render each Unicode scalar of `glyph` as `U+XXXX`: uppercase hex,
/// zero-padded to at least four digits.
pub fn code_points(glyph: &str) -> Vec<String> {
    glyph.chars().map(|ch| format!("U+{:04X}", ch as u32)).collect()
}

/// Escape `glyph` for ASCII-safe storage.
///
/// Matches the `unicode_escape` codec the original tooling round-tripped
/// through: printable ASCII passes through (backslash doubled), `\t`/`\n`/`\r`
/// become two-character escapes, other scalars below U+0100 become `\xNN`,
/// the rest of the BMP becomes `\uNNNN`, and astral scalars `\UNNNNNNNN`.
pub fn unicode_escape(glyph: &str) -> String {
    let mut out = String::with_capacity(glyph.len());
    for ch in glyph.chars() {
        let cp = ch as u32;
        match cp {
            0x09 => out.push_str("\\t"),
            0x0A => out.push_str("\\n"),
            0x0D => out.push_str("\\r"),
            0x5C => out.push_str("\\\\"),
            0x20..=0x7E => out.push(ch),
            0x00..=0xFF => out.push_str(&format!("\\x{cp:02x}")),
            0x100..=0xFFFF => out.push_str(&format!("\\u{cp:04x}")),
            _ => out.push_str(&format!("\\U{cp:08x}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_points_single_scalar() {
        assert_eq!(code_points("\u{13000}"), vec!["U+13000"]);
    }

    #[test]
    fn code_points_preserve_order() {
        assert_eq!(
            code_points("\u{13000}\u{1300A}"),
            vec!["U+13000", "U+1300A"]
        );
    }

    #[test]
    fn code_points_pad_to_four_digits() {
        assert_eq!(code_points("A"), vec!["U+0041"]);
    }

    #[test]
    fn code_points_empty_glyph() {
        assert!(code_points("").is_empty());
    }

    #[test]
    fn escape_astral_scalar() {
        assert_eq!(unicode_escape("\u{13000}"), "\\U00013000");
    }

    #[test]
    fn escape_bmp_scalar() {
        assert_eq!(unicode_escape("\u{2625}"), "\\u2625");
    }

    #[test]
    fn escape_latin1_scalar() {
        assert_eq!(unicode_escape("\u{00E9}"), "\\xe9");
    }

    #[test]
    fn escape_ascii_passes_through() {
        assert_eq!(unicode_escape("A1 b"), "A1 b");
    }

    #[test]
    fn escape_backslash_and_controls() {
        assert_eq!(unicode_escape("a\\b\tc"), "a\\\\b\\tc");
    }

    #[test]
    fn new_derives_encodings() {
        let rec = SignRecord::new(
            "A-Man".into(),
            "A1".into(),
            "\u{13000}".into(),
            "seated man".into(),
        );
        assert_eq!(rec.code_points, vec!["U+13000"]);
        assert_eq!(rec.escaped_form, "\\U00013000");
        assert_eq!(rec.description, "seated man");
    }
}
