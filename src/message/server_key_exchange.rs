use crate::types::SignatureAndHashAlgorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerKeyExchange {
    /// Encoded key exchange parameters.
    pub params: Vec<u8>,
    /// Hash/signature identifiers, only sent from TLS 1.2 on.
    pub algorithm: Option<SignatureAndHashAlgorithm>,
    /// Empty for anonymous key exchange.
    pub signature: Vec<u8>,
}

impl ServerKeyExchange {
    pub fn new(
        params: Vec<u8>,
        algorithm: Option<SignatureAndHashAlgorithm>,
        signature: Vec<u8>,
    ) -> Self {
        ServerKeyExchange {
            params,
            algorithm,
            signature,
        }
    }
}
