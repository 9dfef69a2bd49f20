//! Certificate handling module
//!
//! This module provides functionality for:
//! - Loading PEM certificate files referenced by server configuration
//! - Retrieving the certificate presented by a live host
//! - Evaluating remaining validity against a warning threshold

pub mod expiry;
pub mod loader;
pub mod record;
pub mod remote;

pub use expiry::evaluate;
pub use loader::load;
pub use record::{CertificateRecord, EvaluationResult};
pub use remote::{fetch, normalize_target, Target};

use chrono::{DateTime, TimeZone, Utc};
use x509_parser::time::ASN1Time;

/// Convert an ASN.1 validity time to UTC, if representable.
pub(crate) fn asn1_time_to_datetime(time: ASN1Time) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(time.timestamp(), 0).single()
}
