use std::path::PathBuf;

use crate::color::{ColorPolicy, StyleMap};
use crate::layout::GridPolicy;

/// Default x caption; `{n}` is replaced by the frames averaged per sample.
pub const X_CAPTION_TEMPLATE: &str = "1 unit = average of {n} drawn frames";
pub const DEFAULT_Y_CAPTION: &str = "multiple of the ideal speed";

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    pub data_dir: PathBuf,
    pub figure: FigureConfig,
    /// Write a PNG here and exit instead of staying open.
    pub save_path: Option<PathBuf>,
}

/// Inputs of [`crate::figure::Figure::build`].
#[derive(Debug, Clone, Default)]
pub struct FigureConfig {
    pub grid: GridPolicy,
    pub colors: ColorPolicy,
    pub style: StyleMap,
    pub captions: Option<Captions>,
    pub font: Option<FontOverride>,
}

/// Shared axis captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captions {
    pub x: String,
    pub y: String,
}

impl Captions {
    pub fn for_frames_per_unit(n: u32) -> Self {
        Captions {
            x: X_CAPTION_TEMPLATE.replace("{n}", &n.to_string()),
            y: DEFAULT_Y_CAPTION.to_string(),
        }
    }
}

/// Global font change applied to every text style before layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontOverride {
    /// Point size; `None` keeps egui's sizes.
    pub size: Option<f32>,
    /// Render titles and captions strong.
    pub strong: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_mentions_frame_count() {
        let captions = Captions::for_frames_per_unit(25);
        assert_eq!(captions.x, "1 unit = average of 25 drawn frames");
        assert_eq!(captions.y, "multiple of the ideal speed");
    }
}
