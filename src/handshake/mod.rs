//! State of one in-progress handshake.
//!
//! The driver (client or server logic) feeds every received message through
//! [`HandshakeState::confirm_transition_to()`] before storing it, and declares
//! what may come next with [`HandshakeState::set_expected_next()`]. Later
//! steps query the state for the PRF and signature parameters.

mod negotiate;
mod transition;

pub use negotiate::choose_hash;
pub use transition::Transitions;

use crate::crypto::{select_prf, Prf};
use crate::message::{
    Certificate, CertificateRequest, CertificateVerify, ClientHello, ClientKeyExchange, Finished,
    NewSessionTicket, NextProtocol, ServerHello, ServerHelloDone, ServerKeyExchange,
};
use crate::types::{
    CipherSuite, HandshakeType, HashAlgorithm, KeyExchangeAlgorithm, ProtocolVersion,
};
use crate::Error;

/// The transport below the handshake.
pub trait HandshakeIo {
    /// Version of the record that started this handshake.
    fn initial_record_version(&self) -> ProtocolVersion;
}

/// Everything known about a single handshake.
///
/// Owned by exactly one handshake flow. Not shared, no locking.
#[derive(Debug)]
pub struct HandshakeState {
    version: ProtocolVersion,
    ciphersuite: Option<CipherSuite>,
    transitions: Transitions,

    client_hello: Option<ClientHello>,
    server_hello: Option<ServerHello>,
    server_certs: Option<Certificate>,
    server_kex: Option<ServerKeyExchange>,
    cert_req: Option<CertificateRequest>,
    server_hello_done: Option<ServerHelloDone>,
    client_certs: Option<Certificate>,
    client_kex: Option<ClientKeyExchange>,
    client_verify: Option<CertificateVerify>,
    next_protocol: Option<NextProtocol>,
    new_session_ticket: Option<NewSessionTicket>,
    server_finished: Option<Finished>,
    client_finished: Option<Finished>,
}

impl HandshakeState {
    /// Start a handshake on `io`.
    pub fn new(io: &dyn HandshakeIo) -> Self {
        Self::with_version(io.initial_record_version())
    }

    pub fn with_version(version: ProtocolVersion) -> Self {
        debug!("New handshake state, initial version {}", version);
        HandshakeState {
            version,
            ciphersuite: None,
            transitions: Transitions::new(),
            client_hello: None,
            server_hello: None,
            server_certs: None,
            server_kex: None,
            cert_req: None,
            server_hello_done: None,
            client_certs: None,
            client_kex: None,
            client_verify: None,
            next_protocol: None,
            new_session_ticket: None,
            server_finished: None,
            client_finished: None,
        }
    }

    // ------------------------------------------------------------------
    // Version and suite

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn set_version(&mut self, version: ProtocolVersion) {
        if version != self.version {
            debug!("Handshake version {} -> {}", self.version, version);
        }
        self.version = version;
    }

    /// Negotiated cipher suite, `None` until negotiation completes.
    pub fn ciphersuite(&self) -> Option<&CipherSuite> {
        self.ciphersuite.as_ref()
    }

    pub fn set_ciphersuite(&mut self, suite: CipherSuite) {
        debug!("Cipher suite {}", suite);
        self.ciphersuite = Some(suite);
    }

    // ------------------------------------------------------------------
    // Transitions

    /// Approve `msg_type` as the next message, or fail with
    /// `Error::UnexpectedMessage`.
    ///
    /// On success nothing further is accepted until `set_expected_next()`
    /// is called again.
    pub fn confirm_transition_to(&mut self, msg_type: HandshakeType) -> Result<(), Error> {
        self.transitions.confirm(msg_type)
    }

    /// Allow `msg_type` as the next message. Repeat to allow several.
    pub fn set_expected_next(&mut self, msg_type: HandshakeType) {
        self.transitions.expect(msg_type);
    }

    /// Allow any of `msg_types` as the next message.
    pub fn set_expected_next_any(&mut self, msg_types: &[HandshakeType]) {
        for msg_type in msg_types {
            self.transitions.expect(*msg_type);
        }
    }

    /// Whether `msg_type` was ever submitted to `confirm_transition_to()`.
    pub fn received_handshake_msg(&self, msg_type: HandshakeType) -> bool {
        self.transitions.received(msg_type)
    }

    pub fn received_mask(&self) -> u32 {
        self.transitions.received_mask()
    }

    pub fn expecting_mask(&self) -> u32 {
        self.transitions.expecting_mask()
    }

    // ------------------------------------------------------------------
    // Derived lookups

    /// Ticket to store for resumption.
    ///
    /// A non-empty ticket from NewSessionTicket wins, otherwise the one the
    /// client offered in its hello. Empty if there is neither.
    pub fn session_ticket(&self) -> &[u8] {
        if let Some(nst) = &self.new_session_ticket {
            if !nst.ticket().is_empty() {
                return nst.ticket();
            }
        }

        self.client_hello
            .as_ref()
            .map(|ch| ch.session_ticket())
            .unwrap_or(&[])
    }

    /// SRP identity from the client hello, if an SRP suite was negotiated.
    pub fn srp_identifier(&self) -> Option<&str> {
        let suite = self.ciphersuite.as_ref()?;

        if suite.kex_algo() != KeyExchangeAlgorithm::SRP_SHA {
            return None;
        }

        self.client_hello.as_ref()?.srp_identifier()
    }

    /// PRF for the current version and negotiated suite.
    pub fn protocol_specific_prf(&self) -> Result<Prf, Error> {
        let mac = self
            .ciphersuite
            .as_ref()
            .map(|s| s.mac_algo())
            .unwrap_or(HashAlgorithm::None);

        let prf = select_prf(self.version, mac)?;
        debug!("Using {} for {}", prf, self.version);

        Ok(prf)
    }
}

macro_rules! slots {
    ($($field:ident, $setter:ident: $ty:ty;)*) => {
        impl HandshakeState {
            $(
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                /// Replaces any previously stored message.
                pub fn $setter(&mut self, msg: $ty) {
                    self.$field = Some(msg);
                }
            )*
        }
    };
}

slots! {
    client_hello, set_client_hello: ClientHello;
    server_hello, set_server_hello: ServerHello;
    server_certs, set_server_certs: Certificate;
    server_kex, set_server_kex: ServerKeyExchange;
    cert_req, set_cert_req: CertificateRequest;
    server_hello_done, set_server_hello_done: ServerHelloDone;
    client_certs, set_client_certs: Certificate;
    client_kex, set_client_kex: ClientKeyExchange;
    client_verify, set_client_verify: CertificateVerify;
    next_protocol, set_next_protocol: NextProtocol;
    new_session_ticket, set_new_session_ticket: NewSessionTicket;
    server_finished, set_server_finished: Finished;
    client_finished, set_client_finished: Finished;
}
