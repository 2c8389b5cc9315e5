use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};

use crate::color::{ColorPolicy, StyleMap};
use crate::config::{Captions, FigureConfig, FontOverride, PlotConfig};
use crate::layout::GridPolicy;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory with one sample file per metric
    ///
    /// Every regular file is one metric; its name without extension becomes
    /// the subplot title. Each line holds one number.
    #[arg(short, long, value_hint = ValueHint::DirPath, default_value = "../../Data")]
    pub data_dir: PathBuf,

    /// Grid shape: ROWSxCOLS, or 'square' to size it to the metric count
    #[arg(short, long, default_value = "2x3")]
    pub grid: GridPolicy,

    /// Colouring of the sample lines
    #[arg(short, long, value_enum, default_value_t = ColorPolicy::Grouped)]
    pub colors: ColorPolicy,

    /// JSON file with per-metric colours: {"colors": {"fps": "#ff8800"}}
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub style: Option<PathBuf>,

    /// Show shared axis captions
    #[arg(long)]
    pub captions: bool,

    /// Frames averaged into one sample, used in the x caption
    #[arg(long, default_value_t = 10)]
    pub frames_per_unit: u32,

    /// Replace the x caption text (implies --captions)
    #[arg(long)]
    pub x_caption: Option<String>,

    /// Replace the y caption text (implies --captions)
    #[arg(long)]
    pub y_caption: Option<String>,

    /// Font size in points for all text
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Draw titles and captions in strong text
    #[arg(long)]
    pub bold: bool,

    /// Save the figure as PNG and exit
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub save: Option<PathBuf>,

    /// Set the logging level
    ///
    /// RUST_LOG, when set, takes precedence.
    #[arg(short, long, env = "LOG_LEVEL", default_value = "INFO")]
    pub loglevel: log::LevelFilter,
}

impl Cli {
    /// Resolve the options into a [`PlotConfig`], reading the style file if
    /// one was given.
    pub fn into_config(self) -> Result<PlotConfig> {
        let style = match &self.style {
            Some(path) => {
                let style = StyleMap::load(path)
                    .with_context(|| format!("loading style from {}", path.display()))?;
                log::info!("Loaded {} colour overrides from {}", style.len(), path.display());
                style
            }
            None => StyleMap::default(),
        };

        let captions = if self.captions || self.x_caption.is_some() || self.y_caption.is_some() {
            let defaults = Captions::for_frames_per_unit(self.frames_per_unit);
            Some(Captions {
                x: self.x_caption.unwrap_or(defaults.x),
                y: self.y_caption.unwrap_or(defaults.y),
            })
        } else {
            None
        };

        let font = (self.font_size.is_some() || self.bold).then_some(FontOverride {
            size: self.font_size,
            strong: self.bold,
        });

        Ok(PlotConfig {
            data_dir: self.data_dir,
            figure: FigureConfig {
                grid: self.grid,
                colors: self.colors,
                style,
                captions,
                font,
            },
            save_path: self.save,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("perfgrid").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_options() {
        let config = parse(&[]).into_config().unwrap();

        assert_eq!(config.data_dir, PathBuf::from("../../Data"));
        assert_eq!(config.figure.grid, GridPolicy::Fixed { rows: 2, cols: 3 });
        assert_eq!(config.figure.colors, ColorPolicy::Grouped);
        assert!(config.figure.captions.is_none());
        assert!(config.figure.font.is_none());
        assert!(config.save_path.is_none());
    }

    #[test]
    fn resolves_every_option() {
        let config = parse(&[
            "--data-dir",
            "bench/out",
            "--grid",
            "square",
            "--colors",
            "palette",
            "--captions",
            "--frames-per-unit",
            "50",
            "--y-caption",
            "speedup",
            "--font-size",
            "18",
            "--bold",
            "--save",
            "figure.png",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("bench/out"));
        assert_eq!(config.figure.grid, GridPolicy::Square);
        assert_eq!(config.figure.colors, ColorPolicy::Palette);
        assert_eq!(
            config.figure.captions,
            Some(Captions {
                x: "1 unit = average of 50 drawn frames".to_string(),
                y: "speedup".to_string(),
            })
        );
        assert_eq!(
            config.figure.font,
            Some(FontOverride {
                size: Some(18.0),
                strong: true
            })
        );
        assert_eq!(config.save_path, Some(PathBuf::from("figure.png")));
    }

    #[test]
    fn rejects_bad_grid() {
        let parsed = Cli::try_parse_from(["perfgrid", "--grid", "three"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_style_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("style.json");
        let cli = parse(&["--style", missing.to_str().unwrap()]);

        let err = cli.into_config().unwrap_err();
        assert!(format!("{err:#}").contains("loading style"));
    }
}
