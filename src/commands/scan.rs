//! Directory scan command

use crate::certificate::{self, CertificateRecord};
use crate::error::Result;
use crate::nginx;
use crate::output::{self, OutputFormat, TimeFormatter};
use chrono::Utc;
use std::path::Path;
use tokio::task::JoinSet;
use tracing::warn;

/// Scan a directory of configuration files and evaluate every referenced
/// certificate concurrently, one task per reference.
///
/// The set is drained before returning, so no task outlives the run. A
/// certificate that fails to load is logged and left out of the output
/// without affecting its siblings; output lines may appear in any order.
pub async fn run_scan(
    folder: &Path,
    suffix: &str,
    warn_days: i64,
    formatter: TimeFormatter,
    format: OutputFormat,
) -> Result<()> {
    let references = nginx::scan(folder, suffix)?;

    let mut tasks = JoinSet::new();
    for reference in references {
        tasks.spawn(async move {
            match certificate::loader::load(&reference.certificate_path) {
                Ok(record) => {
                    let record = CertificateRecord {
                        source: reference.label,
                        ..record
                    };
                    let result = certificate::evaluate(&record, warn_days, Utc::now());
                    if let Err(e) = output::emit(&result, formatter, format, false) {
                        warn!("{}", e);
                    }
                }
                Err(e) => warn!("{}", e),
            }
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            warn!("certificate task failed: {}", e);
        }
    }

    Ok(())
}
