use crate::types::{CipherSuite, ProtocolVersion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHello {
    pub server_version: ProtocolVersion,
    pub random: [u8; 32],
    pub session_id: Vec<u8>,
    pub cipher_suite: u16,
    pub supports_session_ticket: bool,
    pub next_protocols: Vec<String>,
}

impl ServerHello {
    pub fn new(
        server_version: ProtocolVersion,
        random: [u8; 32],
        session_id: Vec<u8>,
        cipher_suite: u16,
    ) -> Self {
        ServerHello {
            server_version,
            random,
            session_id,
            cipher_suite,
            supports_session_ticket: false,
            next_protocols: Vec::new(),
        }
    }

    pub fn with_session_ticket_support(mut self) -> Self {
        self.supports_session_ticket = true;
        self
    }

    pub fn with_next_protocols(mut self, protocols: Vec<String>) -> Self {
        self.next_protocols = protocols;
        self
    }

    /// The selected suite, if it is one this crate knows.
    pub fn ciphersuite(&self) -> Option<CipherSuite> {
        CipherSuite::from_u16(self.cipher_suite)
    }
}
