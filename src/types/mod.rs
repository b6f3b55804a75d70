//! Protocol identifiers shared by the handshake core.

mod alert;
pub use alert::AlertDescription;

mod algorithm;
pub use algorithm::{HashAlgorithm, SignatureAlgorithm, SignatureAndHashAlgorithm};

mod cipher_suite;
pub use cipher_suite::{CipherSuite, KeyExchangeAlgorithm};

mod version;
pub use version::ProtocolVersion;

mod handshake;
pub use handshake::HandshakeType;
