//! Single-target check commands

use crate::certificate::{self, EvaluationResult};
use crate::error::{Result, ScanError};
use crate::output::{self, OutputFormat, TimeFormatter};
use chrono::Utc;
use std::path::Path;
use std::time::Duration;

/// Check the certificate presented by a live host. Any fetch error is the
/// caller's to surface.
pub async fn run_domain(
    target: &str,
    warn_days: i64,
    timeout: Duration,
    formatter: TimeFormatter,
    format: OutputFormat,
) -> Result<()> {
    let record = certificate::remote::fetch(target, timeout).await?;
    let result = certificate::evaluate(&record, warn_days, Utc::now());
    output::emit(&result, formatter, format, true)?;
    expired_to_error(&result)
}

/// Check a single local certificate file.
pub async fn run_file(
    path: &Path,
    warn_days: i64,
    formatter: TimeFormatter,
    format: OutputFormat,
) -> Result<()> {
    let record = certificate::loader::load(path)?;
    let result = certificate::evaluate(&record, warn_days, Utc::now());
    output::emit(&result, formatter, format, true)?;
    expired_to_error(&result)
}

/// An already-expired certificate is still classified and printed, but the
/// single-target run exits non-zero to flag it.
fn expired_to_error(result: &EvaluationResult) -> Result<()> {
    if result.remaining_days < 0 {
        return Err(ScanError::CertificateExpired {
            subject: result.source.clone(),
            days: result.remaining_days.abs(),
        });
    }
    Ok(())
}
