use std::fmt;

use nom::number::complete::be_u16;
use nom::IResult;

/// Protocol version of a TLS or DTLS handshake.
///
/// Negotiation logic asks the version what it can do
/// (`supports_negotiable_signature_algorithms()` and friends) instead of
/// comparing version numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum ProtocolVersion {
    SSL3_0,
    TLS1_0,
    TLS1_1,
    TLS1_2,
    DTLS1_0,
    DTLS1_2,
    Unknown(u16),
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::Unknown(0)
    }
}

impl ProtocolVersion {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0300 => ProtocolVersion::SSL3_0,
            0x0301 => ProtocolVersion::TLS1_0,
            0x0302 => ProtocolVersion::TLS1_1,
            0x0303 => ProtocolVersion::TLS1_2,
            0xFEFF => ProtocolVersion::DTLS1_0,
            0xFEFD => ProtocolVersion::DTLS1_2,
            _ => ProtocolVersion::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            ProtocolVersion::SSL3_0 => 0x0300,
            ProtocolVersion::TLS1_0 => 0x0301,
            ProtocolVersion::TLS1_1 => 0x0302,
            ProtocolVersion::TLS1_2 => 0x0303,
            ProtocolVersion::DTLS1_0 => 0xFEFF,
            ProtocolVersion::DTLS1_2 => 0xFEFD,
            ProtocolVersion::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], ProtocolVersion> {
        let (input, version) = be_u16(input)?;
        Ok((input, ProtocolVersion::from_u16(version)))
    }

    /// Whether this is one of the versions the handshake core knows about.
    pub fn is_known(&self) -> bool {
        !matches!(self, ProtocolVersion::Unknown(_))
    }

    /// DTLS versions run over a datagram transport.
    pub fn is_datagram_protocol(&self) -> bool {
        matches!(self, ProtocolVersion::DTLS1_0 | ProtocolVersion::DTLS1_2)
    }

    /// TLS 1.2 style (hash, signature) pairs are sent and negotiated.
    pub fn supports_negotiable_signature_algorithms(&self) -> bool {
        matches!(self, ProtocolVersion::TLS1_2 | ProtocolVersion::DTLS1_2)
    }

    /// The PRF hash follows the cipher suite instead of being fixed
    /// by the version.
    pub fn supports_ciphersuite_specific_prf(&self) -> bool {
        matches!(self, ProtocolVersion::TLS1_2 | ProtocolVersion::DTLS1_2)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolVersion::SSL3_0 => write!(f, "SSL v3"),
            ProtocolVersion::TLS1_0 => write!(f, "TLS v1.0"),
            ProtocolVersion::TLS1_1 => write!(f, "TLS v1.1"),
            ProtocolVersion::TLS1_2 => write!(f, "TLS v1.2"),
            ProtocolVersion::DTLS1_0 => write!(f, "DTLS v1.0"),
            ProtocolVersion::DTLS1_2 => write!(f, "DTLS v1.2"),
            ProtocolVersion::Unknown(v) => write!(f, "Unknown version {:#06x}", v),
        }
    }
}
