use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use serde::Deserialize;
use thiserror::Error;

/// Color of the dashed 1.0 reference line.
pub const REFERENCE_COLOR: Color32 = Color32::BLUE;

/// Grouped policy: the first [`GROUP_SIZE`] metrics use this color...
pub const FIRST_GROUP_COLOR: Color32 = Color32::RED;
/// ...and every later metric uses this one.
pub const REST_GROUP_COLOR: Color32 = Color32::GREEN;
pub const GROUP_SIZE: usize = 3;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sample line colour policy
// ---------------------------------------------------------------------------

/// How sample lines are coloured, by position in the name-sorted metric list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorPolicy {
    /// Red for the first three metrics, green for the rest.
    #[default]
    Grouped,
    /// One distinct hue per metric.
    Palette,
}

impl ColorPolicy {
    /// Colours for `count` metrics, in sorted order.
    pub fn colors(&self, count: usize) -> Vec<Color32> {
        match self {
            ColorPolicy::Grouped => (0..count)
                .map(|i| {
                    if i < GROUP_SIZE {
                        FIRST_GROUP_COLOR
                    } else {
                        REST_GROUP_COLOR
                    }
                })
                .collect(),
            ColorPolicy::Palette => generate_palette(count),
        }
    }
}

// ---------------------------------------------------------------------------
// Style file: explicit metric name → Color32
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("reading style file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("in style file {}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<StyleError>,
    },

    #[error("parsing style JSON")]
    Json(#[source] serde_json::Error),

    #[error("metric '{metric}': '{value}' is not a #rrggbb colour")]
    BadColor { metric: String, value: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleFile {
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

/// Per-metric colour overrides, applied on top of a [`ColorPolicy`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    colors: BTreeMap<String, Color32>,
}

impl StyleMap {
    /// Load a JSON style file:
    ///
    /// ```json
    /// { "colors": { "fps": "#ff8800", "gpu": "#0088ff" } }
    /// ```
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let text = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| StyleError::InFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    pub fn from_json(text: &str) -> Result<Self, StyleError> {
        let file: StyleFile = serde_json::from_str(text).map_err(StyleError::Json)?;

        let colors = file
            .colors
            .into_iter()
            .map(|(metric, value)| match Color32::from_hex(&value) {
                Ok(color) => Ok((metric, color)),
                Err(_) => Err(StyleError::BadColor { metric, value }),
            })
            .collect::<Result<_, _>>()?;
        Ok(StyleMap { colors })
    }

    pub fn color_for(&self, metric: &str) -> Option<Color32> {
        self.colors.get(metric).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
