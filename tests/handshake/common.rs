//! Shared helpers for handshake integration tests.

#![allow(unused)]

use tls_handshake_state::message::{ClientHello, ServerHello};
use tls_handshake_state::{
    Error, HandshakeIo, HandshakeState, HandshakeType, HashAlgorithm, ProtocolVersion,
    SignatureAlgorithm, SignatureAndHashAlgorithm,
};

/// Transport stub reporting a fixed record version.
pub struct Io(pub ProtocolVersion);

impl HandshakeIo for Io {
    fn initial_record_version(&self) -> ProtocolVersion {
        self.0
    }
}

pub const ECDHE_RSA_AES128_GCM: u16 = 0xC02F;
pub const ECDHE_ECDSA_AES256_GCM: u16 = 0xC02C;
pub const RSA_AES128_SHA: u16 = 0x002F;
pub const SRP_SHA_AES128_SHA: u16 = 0xC01D;

pub fn new_state(version: ProtocolVersion) -> HandshakeState {
    let _ = env_logger::builder().is_test(true).try_init();
    HandshakeState::new(&Io(version))
}

pub fn client_hello(version: ProtocolVersion, suites: &[u16]) -> ClientHello {
    ClientHello::new(version, [0x11; 32], vec![], suites.to_vec()).with_supported_algorithms([
        SignatureAndHashAlgorithm::new(HashAlgorithm::SHA256, SignatureAlgorithm::RSA),
        SignatureAndHashAlgorithm::new(HashAlgorithm::SHA384, SignatureAlgorithm::ECDSA),
        SignatureAndHashAlgorithm::new(HashAlgorithm::SHA1, SignatureAlgorithm::RSA),
    ])
}

pub fn server_hello(version: ProtocolVersion, suite: u16) -> ServerHello {
    ServerHello::new(version, [0x22; 32], vec![1, 2, 3], suite)
}

/// Declare `next` acceptable, then confirm `msg_type` against it.
pub fn step(
    state: &mut HandshakeState,
    next: &[HandshakeType],
    msg_type: HandshakeType,
) -> Result<(), Error> {
    state.set_expected_next_any(next);
    state.confirm_transition_to(msg_type)
}

/// Mask of every type in `types`.
pub fn mask(types: &[HandshakeType]) -> u32 {
    types.iter().fold(0, |m, t| m | t.bitmask())
}
