mod app;
mod cli;
mod color;
mod config;
mod data;
mod export;
mod figure;
mod layout;
mod state;
mod ui;

use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use app::{PerfGridApp, SaveFailure};
use clap::Parser;
use cli::Cli;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.loglevel)
        .parse_default_env()
        .init();

    let config = cli.into_config()?;
    log::info!("Reading metrics from {}", config.data_dir.display());
    let state = AppState::load(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let save_failure = SaveFailure::default();
    let app_failure = Rc::clone(&save_failure);
    eframe::run_native(
        "perfgrid – benchmark metrics",
        options,
        Box::new(move |cc| Ok(Box::new(PerfGridApp::new(&cc.egui_ctx, state, app_failure)))),
    )
    .map_err(|e| anyhow!("{e}"))?;

    match save_failure.take() {
        Some(e) => Err(e).context("saving figure"),
        None => Ok(()),
    }
}
