mod app;
mod config;
mod doctor;
mod error;
mod event;
mod logging;
mod theme;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::info;

use crate::{
    app::AppState,
    config::IconSet,
    doctor::SignalSampler,
    event::run,
    logging::{DEFAULT_LOG_DIR, init_logging},
};

/// A keyboard-driven TUI that diagnoses a (simulated) home Wi-Fi network
#[derive(Parser, Debug)]
#[command(
    name = "wifi-doctor",
    about = "A keyboard-driven TUI that diagnoses a simulated home Wi-Fi network: signal, nearby networks, channel advice, devices and dead zones.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Use ASCII icons (no Nerd Fonts required)
    #[arg(long)]
    ascii: bool,

    /// Show key logger for debugging
    #[arg(long = "show-keys")]
    show_keys: bool,

    /// Seed for the simulated measurements, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the session log
    #[arg(long = "log-dir", default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Directory where survey reports are saved
    #[arg(long = "report-dir", default_value = ".")]
    report_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    let _logging = init_logging(&args.log_dir)?;
    info!(seed = ?args.seed, report_dir = %args.report_dir.display(), "starting wifi-doctor");

    let mut state = AppState::new(
        args.show_keys,
        IconSet::from_flag(args.ascii),
        SignalSampler::new(args.seed),
        args.report_dir,
    );

    let terminal = ratatui::init();
    enable_raw_mode()?;
    let result = run(terminal, &mut state).await;
    disable_raw_mode()?;

    ratatui::restore();
    result
}
