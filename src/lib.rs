//! Handshake state for TLS and DTLS.
//!
//! Holds the messages of one handshake, validates the order they arrive in,
//! and makes the PRF and signature selections that depend on the negotiated
//! version and cipher suite.
//!
//! ```
//! use tls_handshake_state::{HandshakeState, HandshakeType, ProtocolVersion};
//!
//! let mut state = HandshakeState::with_version(ProtocolVersion::TLS1_2);
//!
//! state.set_expected_next(HandshakeType::ServerHello);
//! state.confirm_transition_to(HandshakeType::ServerHello).unwrap();
//!
//! // Nothing is expected until the driver says so again.
//! assert!(state.confirm_transition_to(HandshakeType::Certificate).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

#[macro_use]
extern crate log;

mod config;
pub use config::{Config, ConfigBuilder, Policy};

mod error;
pub use error::Error;

pub mod crypto;
pub use crypto::{ParsedPrivateKey, ParsedPublicKey, PrivateKey, PublicKey};

mod handshake;
pub use handshake::{choose_hash, HandshakeIo, HandshakeState, Transitions};

pub mod message;

mod types;
pub use types::{
    AlertDescription, CipherSuite, HandshakeType, HashAlgorithm, KeyExchangeAlgorithm,
    ProtocolVersion, SignatureAlgorithm, SignatureAndHashAlgorithm,
};
