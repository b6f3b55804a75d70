use thiserror::Error;

use crate::types::{AlertDescription, HandshakeType};

/// Errors reported by the handshake core.
///
/// Nothing is recovered locally. The driver decides which alert to send
/// (see [`Error::alert()`]) and aborts the handshake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A handshake message arrived that was not declared acceptable.
    #[error(
        "Unexpected state transition in handshake, got {msg_type:?} \
         expected {expected:#06x} received {received:#06x}"
    )]
    UnexpectedMessage {
        msg_type: HandshakeType,
        expected: u32,
        received: u32,
    },

    /// The peer sent identifiers that are inconsistent or forbidden for
    /// the negotiated version.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// An unknown enumerant reached a selection function.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A local key cannot be used for TLS signatures.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration rejected by `ConfigBuilder::build()`.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Key material could not be parsed.
    #[error("Key error: {0}")]
    Key(String),
}

impl Error {
    /// Alert the driver should send before aborting the handshake.
    pub fn alert(&self) -> AlertDescription {
        match self {
            Error::UnexpectedMessage { .. } => AlertDescription::UnexpectedMessage,
            Error::Decoding(_) => AlertDescription::DecodeError,
            Error::Internal(_) | Error::InvalidArgument(_) | Error::Config(_) | Error::Key(_) => {
                AlertDescription::InternalError
            }
        }
    }

    pub fn is_unexpected_message(&self) -> bool {
        matches!(self, Error::UnexpectedMessage { .. })
    }
}
