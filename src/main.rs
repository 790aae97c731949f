mod app;
mod cli;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod report;
mod state;
mod stats;
mod ui;

use std::io::Write;

use anyhow::{Context, Result};
use app::BlockTimeApp;
use clap::Parser;
use eframe::egui;

use cli::Cli;
use config::RunConfig;
use state::AppState;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli.into_config())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("blocktime", log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(config: RunConfig) -> Result<()> {
    log::debug!("Run configuration: {config:?}");

    let dataset = data::loader::load_file(&config.path)?;
    let analysis = pipeline::analyze(&dataset, &config.options)
        .with_context(|| format!("analysing {}", config.path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &analysis, config.format, config.preview)?;
    out.flush()?;
    drop(out);

    if !config.plot {
        return Ok(());
    }

    let state = AppState::with_analysis(&config.path, dataset, config.options, analysis);
    show_viewer(&config, state)
}

/// Open the plot window; returns once the user closes it.
fn show_viewer(config: &RunConfig, state: AppState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = format!("blocktime – {}", config.path.display());
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(BlockTimeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}
