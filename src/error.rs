//! Unified error types for certsweep

use thiserror::Error;

/// Main error type for certsweep operations
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Connection to {host} timed out after {seconds}s")]
    DialTimeout { host: String, seconds: u64 },

    #[error("Failed to connect to {host}: {message}")]
    ConnectionFailed { host: String, message: String },

    #[error("TLS handshake with {host} failed: {message}")]
    HandshakeFailure { host: String, message: String },

    #[error("No certificate presented by {0}")]
    NoCertificatePresented(String),

    #[error("Failed to read {path}: {message}")]
    FileUnreadable { path: String, message: String },

    #[error("Malformed certificate in {label}: {message}")]
    MalformedCertificate { label: String, message: String },

    #[error("Failed to read directory {path}: {message}")]
    DirectoryUnreadable { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ConfigParseFailure { path: String, message: String },

    #[error("Certificate for {subject} expired {days} days ago")]
    CertificateExpired { subject: String, days: i64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
