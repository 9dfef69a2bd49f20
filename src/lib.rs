//! certsweep library
//!
//! Discovers TLS certificates, either referenced by nginx-style
//! configuration files or presented live by a remote host, and reports each
//! certificate's validity window and remaining days until expiry, flagging
//! certificates that are near expiry.

pub mod certificate;
pub mod cli;
pub mod commands;
pub mod error;
pub mod nginx;
pub mod output;

// Re-export commonly used types
pub use certificate::{CertificateRecord, EvaluationResult};
pub use cli::{Cli, Mode};
pub use error::{Result, ScanError};
pub use nginx::DirectiveReference;
