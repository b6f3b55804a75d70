use crate::types::{ProtocolVersion, SignatureAndHashAlgorithm};

/// Client hello as seen by the handshake state.
///
/// Both the TLS and the SSLv2 compatible encodings decode into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHello {
    pub client_version: ProtocolVersion,
    pub random: [u8; 32],
    pub session_id: Vec<u8>,
    pub cipher_suites: Vec<u16>,
    /// Ticket offered in the session_ticket extension. Empty if none.
    pub session_ticket: Vec<u8>,
    /// Identity from the SRP extension (RFC 5054).
    pub srp_identifier: Option<String>,
    /// Pairs from the signature_algorithms extension.
    pub supported_algorithms: Vec<SignatureAndHashAlgorithm>,
    pub next_protocol: bool,
}

impl ClientHello {
    pub fn new(
        client_version: ProtocolVersion,
        random: [u8; 32],
        session_id: Vec<u8>,
        cipher_suites: Vec<u16>,
    ) -> Self {
        ClientHello {
            client_version,
            random,
            session_id,
            cipher_suites,
            session_ticket: Vec::new(),
            srp_identifier: None,
            supported_algorithms: Vec::new(),
            next_protocol: false,
        }
    }

    pub fn with_session_ticket(mut self, ticket: impl Into<Vec<u8>>) -> Self {
        self.session_ticket = ticket.into();
        self
    }

    pub fn with_srp_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.srp_identifier = Some(identifier.into());
        self
    }

    pub fn with_supported_algorithms(
        mut self,
        algorithms: impl IntoIterator<Item = SignatureAndHashAlgorithm>,
    ) -> Self {
        self.supported_algorithms = algorithms.into_iter().collect();
        self
    }

    pub fn with_next_protocol(mut self) -> Self {
        self.next_protocol = true;
        self
    }

    pub fn session_ticket(&self) -> &[u8] {
        &self.session_ticket
    }

    pub fn srp_identifier(&self) -> Option<&str> {
        self.srp_identifier.as_deref()
    }

    pub fn supported_algorithms(&self) -> &[SignatureAndHashAlgorithm] {
        &self.supported_algorithms
    }

    pub fn offered_suite(&self, suite: u16) -> bool {
        self.cipher_suites.contains(&suite)
    }
}
