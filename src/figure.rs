use eframe::egui::Color32;

use crate::color::REFERENCE_COLOR;
use crate::config::{Captions, FigureConfig, FontOverride};
use crate::data::model::MetricCollection;
use crate::layout::{GridLayout, LayoutError};

/// Value of the ideal-speed reference line.
pub const IDEAL_BASELINE: f64 = 1.0;

// ---------------------------------------------------------------------------
// Subplot – one metric in one grid cell
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    pub title: String,
    pub row: usize,
    pub col: usize,
    pub samples: Vec<f64>,
    /// [`IDEAL_BASELINE`] repeated once per sample, drawn dashed.
    pub reference: Vec<f64>,
    pub color: Color32,
    pub reference_color: Color32,
}

impl Subplot {
    /// `[x, y]` points of the sample line; x is the sample index.
    pub fn sample_points(&self) -> Vec<[f64; 2]> {
        indexed(&self.samples)
    }

    pub fn reference_points(&self) -> Vec<[f64; 2]> {
        indexed(&self.reference)
    }
}

fn indexed(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| [i as f64, y])
        .collect()
}

// ---------------------------------------------------------------------------
// Figure – the composed grid
// ---------------------------------------------------------------------------

/// Window-independent description of the chart grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub layout: GridLayout,
    /// Name-sorted, row-major.
    pub subplots: Vec<Subplot>,
    pub captions: Option<Captions>,
    pub font: Option<FontOverride>,
}

impl Figure {
    /// Lay out one subplot per metric.
    ///
    /// Fails when the configured grid cannot hold every metric.
    pub fn build(metrics: &MetricCollection, config: &FigureConfig) -> Result<Self, LayoutError> {
        let layout = config.grid.layout(metrics.len())?;
        let sorted = metrics.sorted();
        let colors = config.colors.colors(sorted.len());

        let subplots = sorted
            .into_iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (series, policy_color))| {
                let (row, col) = layout.cell(i);
                Subplot {
                    title: series.name().to_string(),
                    row,
                    col,
                    samples: series.samples().to_vec(),
                    reference: vec![IDEAL_BASELINE; series.len()],
                    color: config.style.color_for(series.name()).unwrap_or(policy_color),
                    reference_color: REFERENCE_COLOR,
                }
            })
            .collect();

        Ok(Figure {
            layout,
            subplots,
            captions: config.captions.clone(),
            font: config.font,
        })
    }

    /// Subplot drawn at `(row, col)`, if that cell is occupied.
    pub fn subplot_at(&self, row: usize, col: usize) -> Option<&Subplot> {
        if col >= self.layout.cols {
            return None;
        }
        self.subplots.get(row * self.layout.cols + col)
    }

    pub fn is_empty(&self) -> bool {
        self.subplots.is_empty()
    }
}
