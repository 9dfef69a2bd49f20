//! Shared helpers for integration tests

#![allow(dead_code)]

use rcgen::{CertificateParams, KeyPair};

/// 2024-01-01 00:00:00 UTC
pub const JAN_1_2024: i64 = 1_704_067_200;
/// 2024-06-01 00:00:00 UTC
pub const JUN_1_2024: i64 = 1_717_200_000;

/// Self-signed certificate PEM with a pinned validity window, given as Unix
/// timestamps.
pub fn cert_pem(not_before: i64, not_after: i64) -> String {
    let mut params = CertificateParams::new(vec!["test.example.com".to_string()]).unwrap();
    params.not_before = time::OffsetDateTime::from_unix_timestamp(not_before).unwrap();
    params.not_after = time::OffsetDateTime::from_unix_timestamp(not_after).unwrap();

    let key_pair = KeyPair::generate().unwrap();
    params.self_signed(&key_pair).unwrap().pem()
}

/// A private key PEM block, useful as a non-certificate leading block.
pub fn key_pem() -> String {
    KeyPair::generate().unwrap().serialize_pem()
}
