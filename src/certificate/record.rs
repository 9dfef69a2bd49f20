//! Certificate data structures

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Validity window of a single leaf certificate and where it came from.
///
/// `source` is either a filesystem path or an `https://host` string.
#[derive(Debug, Clone)]
pub struct CertificateRecord {
    pub source: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

/// Outcome of evaluating one certificate against the warning threshold.
///
/// `remaining_days` is negative for an already-expired certificate.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub source: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub remaining_days: i64,
    pub near_expiry: bool,
}
