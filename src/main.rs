//! ScanAlert - a terminal dashboard for website monitoring
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates.

use std::path::PathBuf;

use clap::Parser;
use scanalert_app::AppConfig;
use scanalert_core::logging;
use scanalert_core::prelude::*;

/// ScanAlert - a terminal dashboard for website monitoring
#[derive(Parser, Debug)]
#[command(name = "scanalert")]
#[command(about = "Monitor website health from your terminal", long_about = None)]
struct Args {
    /// Path to a config file (defaults to ~/.config/scanalert/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    info!("ScanAlert starting");

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    let result = scanalert_tui::run(config).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("ScanAlert exiting");
    result
}
