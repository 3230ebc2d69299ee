mod app;
mod color;
mod config;
mod signal;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::HarmonicApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional JSON config as the first argument.
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let config = config::load_config(&path)?;
            log::info!("Using config {}", path.display());
            config
        }
        None => DashboardConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Harmonic Signal Generator",
        options,
        Box::new(|_cc| Ok(Box::new(HarmonicApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running dashboard")
}
