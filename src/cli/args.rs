//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "certsweep")]
#[command(version)]
#[command(about = "Scan nginx configuration for TLS certificates and report expiry", long_about = None)]
pub struct Cli {
    /// Check the certificate presented by a live host (https://host[:port])
    #[arg(long, value_name = "URL", default_value = "")]
    pub domain: String,

    /// Check a single PEM certificate file
    #[arg(long, value_name = "PATH", default_value = "")]
    pub file: String,

    /// Directory of server configuration files to scan
    #[arg(long, value_name = "DIR", default_value = "")]
    pub folder: String,

    /// Configuration file suffix to match (without the dot)
    #[arg(long, default_value = "conf")]
    pub suffix: String,

    /// Warning threshold in days
    #[arg(long, default_value = "30")]
    pub day: i64,

    /// Remote connection timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Display times at a fixed UTC offset, e.g. +08:00
    #[arg(long, value_name = "OFFSET")]
    pub timezone: Option<String>,

    /// Emit one JSON object per certificate
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Invocation mode, resolved from the mutually exclusive target flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    SingleHost(String),
    SingleFile(PathBuf),
    DirectoryScan { folder: PathBuf, suffix: String },
}

impl Cli {
    /// Resolve the invocation mode, `--domain` winning over `--file`
    /// winning over `--folder`. `None` means the invocation is invalid and
    /// help should be shown instead of running anything; a scan needs a
    /// folder and a dot-free, non-empty suffix.
    pub fn mode(&self) -> Option<Mode> {
        if !self.domain.is_empty() {
            return Some(Mode::SingleHost(self.domain.clone()));
        }

        if !self.file.is_empty() {
            return Some(Mode::SingleFile(PathBuf::from(&self.file)));
        }

        if self.folder.is_empty() || self.suffix.is_empty() || self.suffix.contains('.') {
            return None;
        }

        Some(Mode::DirectoryScan {
            folder: PathBuf::from(&self.folder),
            suffix: self.suffix.clone(),
        })
    }
}
