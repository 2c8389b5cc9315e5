use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{FigureConfig, PlotConfig};
use crate::data::loader::load_dir;
use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Directory the current figure was loaded from.
    pub data_dir: PathBuf,

    pub figure_config: FigureConfig,

    /// Figure built from the last successful load.
    pub figure: Figure,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Where the next captured frame should be written.
    pub pending_save: Option<PathBuf>,

    /// Close the window once `pending_save` has been written.
    pub exit_after_save: bool,
}

impl AppState {
    /// Load `config.data_dir` and lay it out. Used at startup, where any
    /// failure ends the run.
    pub fn load(config: PlotConfig) -> Result<Self> {
        let figure = build_figure(&config.data_dir, &config.figure)?;
        let exit_after_save = config.save_path.is_some();
        Ok(Self {
            data_dir: config.data_dir,
            figure_config: config.figure,
            figure,
            status_message: None,
            pending_save: config.save_path,
            exit_after_save,
        })
    }

    /// Switch to another directory. On failure the current figure stays and
    /// the error is shown in the status bar.
    pub fn open_dir(&mut self, dir: PathBuf) {
        match build_figure(&dir, &self.figure_config) {
            Ok(figure) => {
                self.figure = figure;
                self.data_dir = dir;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", dir.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-read the current directory.
    pub fn reload(&mut self) {
        self.open_dir(self.data_dir.clone());
    }

    pub fn request_save(&mut self, path: PathBuf) {
        self.pending_save = Some(path);
    }
}

fn build_figure(dir: &Path, config: &FigureConfig) -> Result<Figure> {
    let metrics =
        load_dir(dir).with_context(|| format!("loading metrics from {}", dir.display()))?;
    log::info!("Loaded {} metrics from {}", metrics.len(), dir.display());
    if metrics.is_empty() {
        log::warn!("No metric files in {}", dir.display());
    }
    let figure = Figure::build(&metrics, config)?;
    log::debug!(
        "Grid {}x{} ({} cells, policy {}) for {} metrics",
        figure.layout.rows,
        figure.layout.cols,
        figure.layout.capacity(),
        config.grid,
        figure.subplots.len()
    );
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridPolicy;

    fn data_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn load_builds_figure() {
        let dir = data_dir(&[("a.txt", "1\n2\n"), ("b.txt", "1\n")]);
        let state = AppState::load(PlotConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(state.figure.subplots.len(), 2);
        assert!(state.pending_save.is_none());
        assert!(!state.exit_after_save);
    }

    #[test]
    fn load_fails_when_grid_too_small() {
        let dir = data_dir(&[("a.txt", "1\n"), ("b.txt", "1\n")]);
        let mut config = PlotConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        config.figure.grid = GridPolicy::Fixed { rows: 1, cols: 1 };

        let err = AppState::load(config).err().unwrap();
        assert!(format!("{err:#}").contains("too many metrics"));
    }

    #[test]
    fn failed_reload_keeps_previous_figure() {
        let good = data_dir(&[("a.txt", "1\n")]);
        let bad = data_dir(&[("a.txt", "x\n")]);
        let mut state = AppState::load(PlotConfig {
            data_dir: good.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();

        state.open_dir(bad.path().to_path_buf());

        assert_eq!(state.data_dir, good.path());
        assert_eq!(state.figure.subplots.len(), 1);
        assert!(state.status_message.as_deref().unwrap().contains("not a number"));
    }

    #[test]
    fn save_path_sets_exit_after_save() {
        let dir = data_dir(&[("a.txt", "1\n")]);
        let state = AppState::load(PlotConfig {
            data_dir: dir.path().to_path_buf(),
            save_path: Some(dir.path().join("out.png")),
            ..Default::default()
        })
        .unwrap();

        assert!(state.exit_after_save);
        assert!(state.pending_save.is_some());
    }
}
