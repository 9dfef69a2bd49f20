//! Certificate file loading
//!
//! Reads a certificate file and parses the leaf certificate's validity
//! window. Only the first PEM block is parsed; any chain certificates
//! following it in the same file are ignored.

use crate::certificate::record::CertificateRecord;
use crate::error::{Result, ScanError};
use std::path::Path;
use x509_parser::prelude::*;

/// Load the leaf certificate from a PEM file.
pub fn load(path: &Path) -> Result<CertificateRecord> {
    let data = std::fs::read(path).map_err(|e| ScanError::FileUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let der = first_pem_block(&data).map_err(|message| ScanError::MalformedCertificate {
        label: path.display().to_string(),
        message,
    })?;

    let (_, cert) =
        X509Certificate::from_der(&der).map_err(|e| ScanError::MalformedCertificate {
            label: path.display().to_string(),
            message: format!("{:?}", e),
        })?;

    let not_before = validity_time(cert.validity().not_before, path)?;
    let not_after = validity_time(cert.validity().not_after, path)?;

    Ok(CertificateRecord {
        source: path.display().to_string(),
        not_before,
        not_after,
    })
}

/// Decode the first PEM block in the file, whatever its tag.
fn first_pem_block(data: &[u8]) -> std::result::Result<Vec<u8>, String> {
    let blocks = ::pem::parse_many(data).map_err(|e| format!("failed to parse PEM: {}", e))?;

    blocks
        .into_iter()
        .next()
        .map(|block| block.into_contents())
        .ok_or_else(|| "no PEM block found".to_string())
}

fn validity_time(time: ASN1Time, path: &Path) -> Result<chrono::DateTime<chrono::Utc>> {
    super::asn1_time_to_datetime(time).ok_or_else(|| ScanError::MalformedCertificate {
        label: path.display().to_string(),
        message: "validity timestamp out of range".to_string(),
    })
}
