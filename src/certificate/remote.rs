//! Live certificate retrieval
//!
//! Connects to a remote host and extracts the leaf certificate it presents.
//! The handshake deliberately skips peer verification: this code inspects
//! whatever the server offers, including expired and self-signed
//! certificates that a verifying client would refuse to talk to. No client
//! certificate is sent. Do not reuse this connection path for anything that
//! needs an authenticated peer.

use crate::certificate::record::CertificateRecord;
use crate::error::{Result, ScanError};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use url::Url;
use x509_parser::prelude::*;

/// Normalized dial target derived from an `https://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    /// The `host:port` string handed to the dialer.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Normalize an `https://host[/...]` string into a dialable target.
///
/// The scheme is stripped, any path discarded, and the default port 443
/// appended when none is given. Anything that is not a well-formed `https`
/// URL with a host is rejected.
pub fn normalize_target(target: &str) -> Result<Target> {
    let url = Url::parse(target)
        .map_err(|e| ScanError::InvalidTarget(format!("{}: {}", target, e)))?;

    if url.scheme() != "https" {
        return Err(ScanError::InvalidTarget(format!(
            "{}: expected an https:// URL",
            target
        )));
    }

    let host = url
        .host_str()
        .ok_or_else(|| ScanError::InvalidTarget(format!("{}: missing host", target)))?;

    Ok(Target {
        host: host.to_string(),
        port: url.port_or_known_default().unwrap_or(443),
    })
}

/// Fetch the leaf certificate presented by a remote host.
///
/// Only the TCP dial is bounded by `timeout`; the handshake runs to
/// completion or error on its own. The socket is dropped, and with it
/// closed, on every exit path.
pub async fn fetch(target: &str, timeout: Duration) -> Result<CertificateRecord> {
    let dial = normalize_target(target)?;

    let config = rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyVerifier))
        .with_no_client_auth();
    let connector = TlsConnector::from(Arc::new(config));

    let server_name: ServerName<'static> = ServerName::try_from(dial.host.clone())
        .map_err(|_| ScanError::InvalidTarget(format!("{}: invalid server name", target)))?;

    let stream = tokio::time::timeout(timeout, TcpStream::connect(dial.authority()))
        .await
        .map_err(|_| ScanError::DialTimeout {
            host: dial.authority(),
            seconds: timeout.as_secs(),
        })?
        .map_err(|e| ScanError::ConnectionFailed {
            host: dial.authority(),
            message: e.to_string(),
        })?;

    let tls_stream = connector
        .connect(server_name, stream)
        .await
        .map_err(|e| ScanError::HandshakeFailure {
            host: dial.authority(),
            message: e.to_string(),
        })?;

    let (_, connection) = tls_stream.get_ref();
    let leaf = connection
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| ScanError::NoCertificatePresented(target.to_string()))?;

    let (_, cert) =
        X509Certificate::from_der(leaf.as_ref()).map_err(|e| ScanError::MalformedCertificate {
            label: target.to_string(),
            message: format!("{:?}", e),
        })?;

    let not_before = validity_time(cert.validity().not_before, target)?;
    let not_after = validity_time(cert.validity().not_after, target)?;

    Ok(CertificateRecord {
        source: target.to_string(),
        not_before,
        not_after,
    })
}

fn validity_time(time: ASN1Time, target: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    super::asn1_time_to_datetime(time).ok_or_else(|| ScanError::MalformedCertificate {
        label: target.to_string(),
        message: "validity timestamp out of range".to_string(),
    })
}

/// Certificate verifier that accepts any peer certificate.
#[derive(Debug)]
struct AcceptAnyVerifier;

impl ServerCertVerifier for AcceptAnyVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_scheme_and_appends_default_port() {
        let target = normalize_target("https://example.com").unwrap();
        assert_eq!(target.host, "example.com");
        assert_eq!(target.port, 443);
        assert_eq!(target.authority(), "example.com:443");
    }

    #[test]
    fn normalize_discards_path_and_trailing_slash() {
        let target = normalize_target("https://example.com/some/path/").unwrap();
        assert_eq!(target.authority(), "example.com:443");

        let target = normalize_target("https://example.com/").unwrap();
        assert_eq!(target.authority(), "example.com:443");
    }

    #[test]
    fn normalize_keeps_explicit_port() {
        let target = normalize_target("https://example.com:8443").unwrap();
        assert_eq!(target.port, 8443);
    }

    #[test]
    fn normalize_rejects_non_https_schemes() {
        assert!(matches!(
            normalize_target("http://example.com"),
            Err(ScanError::InvalidTarget(_))
        ));
    }

    #[test]
    fn normalize_rejects_malformed_input() {
        assert!(matches!(
            normalize_target("example.com"),
            Err(ScanError::InvalidTarget(_))
        ));
        assert!(matches!(
            normalize_target("https://"),
            Err(ScanError::InvalidTarget(_))
        ));
    }
}
