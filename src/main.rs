//! certsweep - TLS certificate expiry scanner
//!
//! Checks a live host, a single certificate file, or a whole directory of
//! nginx configuration files for certificates that are about to expire.

use certsweep::cli::{Cli, Mode};
use certsweep::commands;
use certsweep::output::{OutputFormat, TimeFormatter};
use certsweep::{Result, ScanError};
use chrono::FixedOffset;
use clap::{CommandFactory, Parser};
use console::style;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let formatter = TimeFormatter::new(parse_offset(cli.timezone.as_deref())?);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let Some(mode) = cli.mode() else {
        let mut command = Cli::command();
        command.print_help()?;
        return Ok(());
    };

    match mode {
        Mode::SingleHost(target) => {
            commands::run_domain(
                &target,
                cli.day,
                Duration::from_secs(cli.timeout),
                formatter,
                format,
            )
            .await
        }
        Mode::SingleFile(path) => commands::run_file(&path, cli.day, formatter, format).await,
        Mode::DirectoryScan { folder, suffix } => {
            commands::run_scan(&folder, &suffix, cli.day, formatter, format).await
        }
    }
}

fn parse_offset(timezone: Option<&str>) -> Result<Option<FixedOffset>> {
    match timezone {
        None => Ok(None),
        Some(raw) => raw
            .parse::<FixedOffset>()
            .map(Some)
            .map_err(|_| ScanError::Config(format!("invalid timezone offset: {}", raw))),
    }
}
