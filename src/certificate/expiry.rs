//! Remaining-validity evaluation

use crate::certificate::record::{CertificateRecord, EvaluationResult};
use chrono::{DateTime, Duration, Utc};

/// Classify a certificate's remaining validity against a warning threshold.
///
/// Remaining days are whole 24-hour periods between `now` and the expiry
/// instant, truncated toward zero; the count goes negative once the
/// certificate has expired. All comparisons happen in UTC; display
/// timezones play no part here.
pub fn evaluate(
    record: &CertificateRecord,
    warn_days: i64,
    now: DateTime<Utc>,
) -> EvaluationResult {
    let remaining_days = (record.not_after - now).num_hours() / 24;
    let near_expiry = record.not_after < now + Duration::days(warn_days);

    EvaluationResult {
        source: record.source.clone(),
        not_before: record.not_before,
        not_after: record.not_after,
        remaining_days,
        near_expiry,
    }
}
