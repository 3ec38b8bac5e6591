//! Pipeline configuration.
//!
//! All knobs live in one structure, optionally loaded from a TOML file and
//! overridden by CLI flags, then validated once before the run starts. The
//! pipeline itself never prompts for anything.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory scanned for `.txt` catalog sources.
    pub input_dir: PathBuf,
    /// Directory receiving every produced artifact.
    pub output_dir: PathBuf,
    /// Edge length of the square placeholder images, in pixels.
    pub image_size: u32,
    /// Base glyph scale in pixels; the renderer draws an em-size ladder
    /// of fractions of this.
    pub font_size: f32,
    /// Candidate fonts tried in order; the first one that loads wins.
    pub font_paths: Vec<PathBuf>,
    /// Re-render images that already exist on disk.
    pub overwrite: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("output"),
            image_size: 100,
            font_size: 40.0,
            font_paths: default_font_paths(),
            overwrite: false,
        }
    }
}

/// Fonts with hieroglyphic coverage first, then common system fallbacks.
fn default_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/noto/NotoSansEgyptianHieroglyphs-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansEgyptianHieroglyphs-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

impl PipelineConfig {
    /// Load configuration from a TOML file; missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Validate the configuration before the pipeline starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input_dir.is_dir() {
            return Err(ConfigError::InputDir {
                path: self.input_dir.display().to_string(),
            });
        }
        if self.image_size == 0 {
            return Err(ConfigError::Invalid {
                message: "image_size must be > 0".into(),
            });
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::Invalid {
                message: "font_size must be > 0".into(),
            });
        }
        Ok(())
    }

    /// Directory for the per-sign placeholder images.
    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join("glyph_images")
    }

    /// Directory for the per-category JSON files.
    pub fn category_json_dir(&self) -> PathBuf {
        self.output_dir.join("signs_by_category_json")
    }

    /// Directory for the per-category CSV files.
    pub fn category_csv_dir(&self) -> PathBuf {
        self.output_dir.join("signs_by_category_csv")
    }
}
