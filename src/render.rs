//! Placeholder PNG rendering for glyphs.
//!
//! One image per sign: a white square with the glyph drawn at a ladder of
//! em sizes when a usable font is found, or a bordered placeholder box when
//! none of the configured fonts load. Rendering quality is explicitly not a
//! goal; the images exist so downstream consumers have one bitmap per code.

use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::error::RenderError;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Fractions of the base scale the glyph is drawn at, top to bottom.
const EM_SIZES: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// Renders placeholder bitmaps for glyph strings.
pub struct GlyphRenderer {
    size: u32,
    base_scale: f32,
    overwrite: bool,
    font: Option<FontVec>,
}

impl GlyphRenderer {
    /// Create a renderer, trying each font path in order and keeping the
    /// first one that loads. With no usable font the renderer still works,
    /// producing bordered placeholder boxes.
    pub fn new(size: u32, base_scale: f32, overwrite: bool, font_paths: &[PathBuf]) -> Self {
        let font = load_first_font(font_paths);
        if font.is_none() {
            tracing::warn!(
                candidates = font_paths.len(),
                "no usable font found; rendering placeholder boxes"
            );
        }
        Self {
            size,
            base_scale,
            overwrite,
            font,
        }
    }

    /// Whether a font was loaded.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Render `glyph` to `path` as a PNG.
    ///
    /// Returns `Ok(false)` when the image already exists and overwrite is
    /// off; `Ok(true)` when a new image was written.
    pub fn render(&self, glyph: &str, path: &Path) -> Result<bool, RenderError> {
        if path.exists() && !self.overwrite {
            return Ok(false);
        }

        let mut img = RgbImage::from_pixel(self.size, self.size, WHITE);
        match &self.font {
            Some(font) => self.draw_em_ladder(&mut img, font, glyph),
            None => self.draw_placeholder_box(&mut img),
        }

        img.save(path).map_err(|source| RenderError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(true)
    }

    /// The glyph at each em size, stacked top to bottom and centered
    /// horizontally.
    fn draw_em_ladder(&self, img: &mut RgbImage, font: &FontVec, glyph: &str) {
        let mut y_offset: i32 = 10;
        for em in EM_SIZES {
            let scale = PxScale::from(self.base_scale * em);
            let (w, h) = text_size(scale, font, glyph);
            let x = (self.size.saturating_sub(w) / 2) as i32;
            draw_text_mut(img, BLACK, x, y_offset, scale, font, glyph);
            y_offset += h as i32 + 5;
        }
    }

    /// No font: a bordered box with a diagonal, clearly a placeholder.
    fn draw_placeholder_box(&self, img: &mut RgbImage) {
        let inset = (self.size / 16).max(1);
        let inner = self.size.saturating_sub(2 * inset).max(1);
        draw_hollow_rect_mut(
            img,
            Rect::at(inset as i32, inset as i32).of_size(inner, inner),
            BLACK,
        );
        draw_line_segment_mut(
            img,
            (inset as f32, inset as f32),
            ((inset + inner) as f32, (inset + inner) as f32),
            BLACK,
        );
    }
}

/// Try each candidate path in order, returning the first font that reads
/// and parses.
fn load_first_font(font_paths: &[PathBuf]) -> Option<FontVec> {
    for path in font_paths {
        let Ok(bytes) = std::fs::read(path) else {
            tracing::debug!(path = %path.display(), "font candidate not readable");
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), "loaded font");
                return Some(font);
            }
            Err(_) => {
                tracing::debug!(path = %path.display(), "font candidate failed to parse");
            }
        }
    }
    None
}
