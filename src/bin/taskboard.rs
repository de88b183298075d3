//! Taskboard HTTP server.
//!
//! Usage:
//!
//! ```text
//! taskboard [--bind 0.0.0.0:9000] [--database-url postgres://...] [--config path]
//! ```
//!
//! The process exits with a failure status when configuration cannot be
//! loaded or the database is unreachable at startup.

use clap::Parser;
use std::process::ExitCode;
use taskboard::app;
use taskboard::config::{AppConfig, CliArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(addr = %config.bind_addr, "starting taskboard");
    match app::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "taskboard stopped");
            ExitCode::FAILURE
        }
    }
}
