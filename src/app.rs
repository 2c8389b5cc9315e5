use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use eframe::egui::{self, ColorImage, TextStyle};

use crate::config::FontOverride;
use crate::export::{save_png, ExportError};
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Export failure of a `--save` run, read by `main` after the window closes.
pub type SaveFailure = Rc<RefCell<Option<ExportError>>>;

pub struct PerfGridApp {
    pub state: AppState,
    /// A screenshot was requested and its event has not arrived yet.
    screenshot_pending: bool,
    save_failure: SaveFailure,
}

impl PerfGridApp {
    pub fn new(ctx: &egui::Context, state: AppState, save_failure: SaveFailure) -> Self {
        if let Some(font) = state.figure.font {
            apply_font_override(ctx, font);
        }
        Self {
            state,
            screenshot_pending: false,
            save_failure,
        }
    }

    /// Write a captured frame to the pending save path. In `--save` mode the
    /// error is kept for `main` and the window is closed either way.
    fn write_capture(&mut self, ctx: &egui::Context, frame: &ColorImage) {
        let Some(path) = self.state.pending_save.take() else {
            return;
        };
        match save_png(frame, &path) {
            Ok(()) => self.state.status_message = None,
            Err(e) => {
                log::error!("Failed to save figure: {e:#}");
                self.state.status_message = Some(format!("Error: {e}"));
                if self.state.exit_after_save {
                    *self.save_failure.borrow_mut() = Some(e);
                }
            }
        }
        if self.state.exit_after_save {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let frame: Option<Arc<ColorImage>> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Screenshot { image, .. } => Some(image.clone()),
                    _ => None,
                })
                .last()
        });

        if let Some(frame) = frame {
            self.screenshot_pending = false;
            self.write_capture(ctx, &frame);
        } else if self.state.pending_save.is_some() && !self.screenshot_pending {
            self.screenshot_pending = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            ctx.request_repaint();
        }
    }
}

impl eframe::App for PerfGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: metric grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_grid(ui, &self.state.figure);
        });

        self.handle_screenshot(ctx);
    }
}

/// Resize every text style, keeping egui's relative heading/small scale.
pub fn apply_font_override(ctx: &egui::Context, font: FontOverride) {
    let Some(size) = font.size else {
        return;
    };
    ctx.all_styles_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                TextStyle::Heading => size * 1.4,
                TextStyle::Small => size * 0.75,
                _ => size,
            };
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;

    fn app_saving_to(save_path: std::path::PathBuf, data: &std::path::Path) -> PerfGridApp {
        std::fs::write(data.join("fps.txt"), "1\n").unwrap();
        let state = AppState::load(PlotConfig {
            data_dir: data.to_path_buf(),
            save_path: Some(save_path),
            ..Default::default()
        })
        .unwrap();
        PerfGridApp::new(&egui::Context::default(), state, SaveFailure::default())
    }

    fn frame() -> ColorImage {
        ColorImage::from_rgba_unmultiplied([2, 2], &[0, 0, 255, 255].repeat(4))
    }

    #[test]
    fn failed_save_is_kept_for_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("figure.png");
        let mut app = app_saving_to(target, dir.path());
        let failure = Rc::clone(&app.save_failure);

        app.write_capture(&egui::Context::default(), &frame());

        assert!(app.state.pending_save.is_none());
        assert!(matches!(
            failure.borrow().as_ref(),
            Some(ExportError::Encode { .. })
        ));
    }

    #[test]
    fn successful_save_leaves_no_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("figure.png");
        let mut app = app_saving_to(target.clone(), dir.path());

        app.write_capture(&egui::Context::default(), &frame());

        assert!(target.exists());
        assert!(app.save_failure.borrow().is_none());
    }
}
