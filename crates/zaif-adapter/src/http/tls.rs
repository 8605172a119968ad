/*
[INPUT]:  Optional PEM bundle of extra trust roots
[OUTPUT]: rustls client configuration with a bounded certificate chain depth
[POS]:    HTTP layer - TLS verification handed to reqwest as a preconfigured backend
[UPDATE]: When changing trust roots or chain verification rules
*/

use std::path::Path;
use std::sync::Arc;

use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, RootCertStore, SignatureScheme};
use tracing::{debug, warn};

use crate::http::{Result, ZaifError};

/// Maximum number of intermediate certificates accepted between the server
/// certificate and a trust anchor.
pub const MAX_VERIFY_DEPTH: usize = 5;

/// Server certificate verifier that rejects chains with more than
/// `max_intermediates` intermediates and hands everything else to `inner`.
#[derive(Debug)]
pub struct DepthLimitedVerifier {
    inner: Arc<dyn ServerCertVerifier>,
    max_intermediates: usize,
}

impl DepthLimitedVerifier {
    pub fn new(inner: Arc<dyn ServerCertVerifier>, max_intermediates: usize) -> Self {
        Self {
            inner,
            max_intermediates,
        }
    }
}

impl ServerCertVerifier for DepthLimitedVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> std::result::Result<ServerCertVerified, rustls::Error> {
        if intermediates.len() > self.max_intermediates {
            warn!(
                intermediates = intermediates.len(),
                max = self.max_intermediates,
                "certificate chain too deep"
            );
            return Err(rustls::Error::General(format!(
                "certificate chain has {} intermediates, at most {} allowed",
                intermediates.len(),
                self.max_intermediates
            )));
        }
        self.inner
            .verify_server_cert(end_entity, intermediates, server_name, ocsp_response, now)
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> std::result::Result<HandshakeSignatureValid, rustls::Error> {
        self.inner.verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.inner.supported_verify_schemes()
    }
}

/// Build the rustls configuration used by every request.
///
/// Trust roots are the Mozilla set plus the certificates in `cert_path`.
pub fn client_tls_config(cert_path: Option<&Path>) -> Result<rustls::ClientConfig> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());

    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    if let Some(path) = cert_path {
        for certificate in load_pem_bundle(path)? {
            roots
                .add(certificate)
                .map_err(|e| ZaifError::Config(format!("Invalid root certificate: {e}")))?;
        }
    }
    debug!(roots = roots.len(), "trust store ready");

    let webpki = WebPkiServerVerifier::builder_with_provider(Arc::new(roots), provider.clone())
        .build()
        .map_err(|e| ZaifError::Config(format!("Failed to build certificate verifier: {e}")))?;
    let verifier = Arc::new(DepthLimitedVerifier::new(webpki, MAX_VERIFY_DEPTH));

    let config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| ZaifError::Config(format!("Unsupported TLS protocol versions: {e}")))?
        .dangerous()
        .with_custom_certificate_verifier(verifier)
        .with_no_client_auth();
    Ok(config)
}

fn load_pem_bundle(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let pem = std::fs::read(path)
        .map_err(|e| ZaifError::Config(format!("Failed to read {}: {e}", path.display())))?;
    let certificates = CertificateDer::pem_slice_iter(&pem)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ZaifError::Config(format!("Invalid certificate bundle: {e:?}")))?;
    if certificates.is_empty() {
        return Err(ZaifError::Config(format!(
            "No certificates in {}",
            path.display()
        )));
    }
    Ok(certificates)
}
