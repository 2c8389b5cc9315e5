use eframe::egui::{RichText, Ui};
use egui_extras::{Size, StripBuilder};
use egui_plot::{Line, LineStyle, Plot, PlotPoints};

use crate::figure::{Figure, Subplot};

// ---------------------------------------------------------------------------
// Metric grid (central panel)
// ---------------------------------------------------------------------------

/// Render the whole figure: one plot per occupied grid cell.
pub fn figure_grid(ui: &mut Ui, figure: &Figure) {
    if figure.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No metric files found  (File → Open directory…)");
        });
        return;
    }

    let rows = figure.layout.rows;
    let cols = figure.layout.cols;

    StripBuilder::new(ui)
        .sizes(Size::remainder(), rows)
        .vertical(|mut row_strip| {
            for row in 0..rows {
                row_strip.cell(|ui: &mut Ui| {
                    StripBuilder::new(ui)
                        .sizes(Size::remainder(), cols)
                        .horizontal(|mut col_strip| {
                            for col in 0..cols {
                                match figure.subplot_at(row, col) {
                                    Some(subplot) => col_strip.cell(|ui: &mut Ui| {
                                        subplot_cell(ui, figure, subplot);
                                    }),
                                    None => col_strip.empty(),
                                }
                            }
                        });
                });
            }
        });
}

fn subplot_cell(ui: &mut Ui, figure: &Figure, subplot: &Subplot) {
    let strong = figure.font.is_some_and(|f| f.strong);
    let styled = |text: &str| {
        let text = RichText::new(text);
        if strong {
            text.strong()
        } else {
            text
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(styled(&subplot.title));
    });

    let mut plot = Plot::new(("metric_plot", subplot.row, subplot.col))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    // Captions go on the outer edge of the grid only, like a shared label.
    if let Some(captions) = &figure.captions {
        let last_row = figure.subplot_at(subplot.row + 1, subplot.col).is_none();
        if last_row {
            plot = plot.x_axis_label(styled(&captions.x));
        }
        if subplot.col == 0 {
            plot = plot.y_axis_label(styled(&captions.y));
        }
    }

    plot.show(ui, |plot_ui| {
        let reference: PlotPoints = subplot.reference_points().into();
        plot_ui.line(
            Line::new(reference)
                .name("ideal")
                .color(subplot.reference_color)
                .style(LineStyle::dashed_loose())
                .width(1.0),
        );

        let samples: PlotPoints = subplot.sample_points().into();
        plot_ui.line(
            Line::new(samples)
                .name(&subplot.title)
                .color(subplot.color)
                .width(1.5),
        );
    });
}
