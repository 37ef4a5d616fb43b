use std::io;

use anyhow::{anyhow, Result};
use clap::Parser;
use student_console::{app, Config, TerminalView, UreqTransport};
use student_core::{Controller, StudentApi, StudentClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never interleave with the table.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout(), "starting");

    let api = StudentApi::new(
        StudentClient::new(&config.base_url),
        UreqTransport::new(config.timeout()),
    );
    let view = TerminalView::new(io::stdin().lock(), io::stdout());
    let mut ui = Controller::new(api, view);
    app::run(&mut ui)
}
