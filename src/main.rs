mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use app::GradScopeApp;
use config::PlotConfig;
use eframe::egui;
use state::AppState;

/// Config file looked up in the working directory when no path is given as
/// the first process argument.
const DEFAULT_CONFIG: &str = "grad_scope.json";

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = PlotConfig::from_file(&config_path)?;

    // Every configured series must read cleanly before any window opens;
    // there is no partial rendering.
    let series = data::reader::load_configured_series(&config)
        .context("loading configured gradient series")?;
    let state = AppState::new(series);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the viewer window is closed.
    eframe::run_native(
        "Grad Scope – Convergence Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(GradScopeApp::new(state)))),
    )
    .map_err(|e| anyhow!("rendering surface failed: {e}"))
}
