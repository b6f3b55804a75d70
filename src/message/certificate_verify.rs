use crate::types::SignatureAndHashAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateVerify {
    /// Hash/signature identifiers, only sent from TLS 1.2 on.
    pub algorithm: Option<SignatureAndHashAlgorithm>,
    pub signature: Vec<u8>,
}

impl CertificateVerify {
    pub fn new(algorithm: Option<SignatureAndHashAlgorithm>, signature: Vec<u8>) -> Self {
        CertificateVerify {
            algorithm,
            signature,
        }
    }
}
