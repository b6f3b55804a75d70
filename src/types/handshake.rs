use nom::error::{Error as NomError, ErrorKind};
use nom::number::complete::be_u8;
use nom::IResult;

use crate::Error;

/// Role a handshake message plays in the handshake.
///
/// Both client hello encodings (TLS and the SSLv2 compatible one) share the
/// same logical role and thus the same bit in the transition masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandshakeType {
    HelloRequest,
    ClientHello,
    ClientHelloSslV2,
    ServerHello,
    HelloVerifyRequest,
    NewSessionTicket,
    Certificate,
    ServerKeyExchange,
    CertificateRequest,
    ServerHelloDone,
    CertificateVerify,
    ClientKeyExchange,
    Finished,
    CertificateUrl,
    CertificateStatus,
    NextProtocol,
    /// ChangeCipherSpec is not a handshake message on the wire, but the
    /// handshake tracks it like one.
    ChangeCipherSpec,
    /// Expect nothing. Used to explicitly disable further messages.
    None,
}

impl HandshakeType {
    /// Bit for this type in the received/expecting masks.
    ///
    /// The mapping is internal control flow, not wire data, and must
    /// never change.
    pub const fn bitmask(self) -> u32 {
        use HandshakeType::*;
        match self {
            HelloVerifyRequest => 1 << 0,
            HelloRequest => 1 << 1,
            ClientHello | ClientHelloSslV2 => 1 << 2,
            ServerHello => 1 << 3,
            Certificate => 1 << 4,
            CertificateUrl => 1 << 5,
            CertificateStatus => 1 << 6,
            ServerKeyExchange => 1 << 7,
            CertificateRequest => 1 << 8,
            ServerHelloDone => 1 << 9,
            CertificateVerify => 1 << 10,
            ClientKeyExchange => 1 << 11,
            NextProtocol => 1 << 12,
            NewSessionTicket => 1 << 13,
            ChangeCipherSpec => 1 << 14,
            Finished => 1 << 15,
            None => 0,
        }
    }

    pub fn as_u8(&self) -> u8 {
        use HandshakeType::*;
        match self {
            HelloRequest => 0,
            ClientHello => 1,
            ServerHello => 2,
            HelloVerifyRequest => 3,
            NewSessionTicket => 4,
            Certificate => 11,
            ServerKeyExchange => 12,
            CertificateRequest => 13,
            ServerHelloDone => 14,
            CertificateVerify => 15,
            ClientKeyExchange => 16,
            Finished => 20,
            CertificateUrl => 21,
            CertificateStatus => 22,
            NextProtocol => 67,
            ClientHelloSslV2 => 253,
            ChangeCipherSpec => 254,
            None => 255,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], HandshakeType> {
        let (rest, value) = be_u8(input)?;
        let msg_type = HandshakeType::try_from(value)
            .map_err(|_| nom::Err::Failure(NomError::new(input, ErrorKind::Switch)))?;
        Ok((rest, msg_type))
    }
}

impl TryFrom<u8> for HandshakeType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use HandshakeType::*;
        Ok(match value {
            0 => HelloRequest,
            1 => ClientHello,
            2 => ServerHello,
            3 => HelloVerifyRequest,
            4 => NewSessionTicket,
            11 => Certificate,
            12 => ServerKeyExchange,
            13 => CertificateRequest,
            14 => ServerHelloDone,
            15 => CertificateVerify,
            16 => ClientKeyExchange,
            20 => Finished,
            21 => CertificateUrl,
            22 => CertificateStatus,
            67 => NextProtocol,
            253 => ClientHelloSslV2,
            254 => ChangeCipherSpec,
            255 => None,
            _ => {
                return Err(Error::Decoding(format!(
                    "Unknown handshake message type {}",
                    value
                )))
            }
        })
    }
}

impl From<HandshakeType> for u8 {
    fn from(value: HandshakeType) -> Self {
        value.as_u8()
    }
}
