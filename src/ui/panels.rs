use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open directory…").clicked() {
                open_dir_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Save as PNG…").clicked() {
                save_png_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let figure = &state.figure;
        ui.label(format!(
            "{} metrics in {} ({}x{} grid)",
            figure.subplots.len(),
            state.data_dir.display(),
            figure.layout.rows,
            figure.layout.cols,
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_dir_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open metrics directory")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = dir {
        log::info!("Opening {}", dir.display());
        state.open_dir(dir);
    }
}

pub fn save_png_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save figure")
        .add_filter("PNG", &["png"])
        .set_file_name("figure.png")
        .save_file();

    if let Some(path) = file {
        state.request_save(path);
    }
}
