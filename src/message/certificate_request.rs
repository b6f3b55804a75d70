use crate::types::{SignatureAlgorithm, SignatureAndHashAlgorithm};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateRequest {
    pub acceptable_cert_types: Vec<SignatureAlgorithm>,
    /// Pairs the server accepts for the client's CertificateVerify.
    /// Only present from TLS 1.2 on.
    pub supported_algorithms: Vec<SignatureAndHashAlgorithm>,
    pub certificate_authorities: Vec<Vec<u8>>,
}

impl CertificateRequest {
    pub fn new(
        acceptable_cert_types: Vec<SignatureAlgorithm>,
        supported_algorithms: Vec<SignatureAndHashAlgorithm>,
        certificate_authorities: Vec<Vec<u8>>,
    ) -> Self {
        CertificateRequest {
            acceptable_cert_types,
            supported_algorithms,
            certificate_authorities,
        }
    }

    pub fn supported_algorithms(&self) -> &[SignatureAndHashAlgorithm] {
        &self.supported_algorithms
    }
}
