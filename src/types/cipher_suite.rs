//! Cipher suite definitions.
//!
//! The handshake core only needs what a suite implies for the handshake:
//! its key exchange, the signature algorithm authenticating the server and
//! the MAC hash (which also drives the TLS 1.2 PRF).

use std::fmt;

use nom::number::complete::be_u16;
use nom::IResult;

use super::{HashAlgorithm, SignatureAlgorithm};

/// Key exchange method of a cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum KeyExchangeAlgorithm {
    /// Static RSA key transport.
    RSA,
    /// Ephemeral finite field Diffie-Hellman.
    DH,
    /// Ephemeral elliptic curve Diffie-Hellman.
    ECDH,
    /// Secure Remote Password (RFC 5054).
    SRP_SHA,
    /// Pre-shared key.
    PSK,
    /// Ephemeral elliptic curve Diffie-Hellman with pre-shared key.
    ECDHE_PSK,
}

impl fmt::Display for KeyExchangeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyExchangeAlgorithm::RSA => "RSA",
            KeyExchangeAlgorithm::DH => "DH",
            KeyExchangeAlgorithm::ECDH => "ECDH",
            KeyExchangeAlgorithm::SRP_SHA => "SRP_SHA",
            KeyExchangeAlgorithm::PSK => "PSK",
            KeyExchangeAlgorithm::ECDHE_PSK => "ECDHE_PSK",
        };
        write!(f, "{}", name)
    }
}

/// A negotiated cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSuite {
    id: u16,
    name: &'static str,
    kex: KeyExchangeAlgorithm,
    sig: SignatureAlgorithm,
    mac: HashAlgorithm,
}

macro_rules! suites {
    ($($id:expr => $name:ident, $kex:ident, $sig:ident, $mac:ident;)*) => {
        const KNOWN: &[CipherSuite] = &[
            $(
                CipherSuite {
                    id: $id,
                    name: stringify!($name),
                    kex: KeyExchangeAlgorithm::$kex,
                    sig: SignatureAlgorithm::$sig,
                    mac: HashAlgorithm::$mac,
                },
            )*
        ];
    };
}

// For AEAD suites the "MAC" is the suite's PRF hash.
suites! {
    0x0004 => TLS_RSA_WITH_RC4_128_MD5, RSA, RSA, MD5;
    0x002F => TLS_RSA_WITH_AES_128_CBC_SHA, RSA, RSA, SHA1;
    0x0035 => TLS_RSA_WITH_AES_256_CBC_SHA, RSA, RSA, SHA1;
    0x003C => TLS_RSA_WITH_AES_128_CBC_SHA256, RSA, RSA, SHA256;
    0x003D => TLS_RSA_WITH_AES_256_CBC_SHA256, RSA, RSA, SHA256;
    0x0032 => TLS_DHE_DSS_WITH_AES_128_CBC_SHA, DH, DSA, SHA1;
    0x0033 => TLS_DHE_RSA_WITH_AES_128_CBC_SHA, DH, RSA, SHA1;
    0x0067 => TLS_DHE_RSA_WITH_AES_128_CBC_SHA256, DH, RSA, SHA256;
    0x009E => TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, DH, RSA, SHA256;
    0x009F => TLS_DHE_RSA_WITH_AES_256_GCM_SHA384, DH, RSA, SHA384;
    0x008C => TLS_PSK_WITH_AES_128_CBC_SHA, PSK, Anonymous, SHA1;
    0xC01D => TLS_SRP_SHA_WITH_AES_128_CBC_SHA, SRP_SHA, Anonymous, SHA1;
    0xC01E => TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA, SRP_SHA, RSA, SHA1;
    0xC01F => TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA, SRP_SHA, DSA, SHA1;
    0xC009 => TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA, ECDH, ECDSA, SHA1;
    0xC013 => TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA, ECDH, RSA, SHA1;
    0xC023 => TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256, ECDH, ECDSA, SHA256;
    0xC024 => TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384, ECDH, ECDSA, SHA384;
    0xC02B => TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, ECDH, ECDSA, SHA256;
    0xC02C => TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384, ECDH, ECDSA, SHA384;
    0xC02F => TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, ECDH, RSA, SHA256;
    0xC030 => TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384, ECDH, RSA, SHA384;
    0xC035 => TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA, ECDHE_PSK, Anonymous, SHA1;
}

impl CipherSuite {
    /// Look up a suite by its IANA value.
    pub fn from_u16(value: u16) -> Option<CipherSuite> {
        KNOWN.iter().find(|s| s.id == value).copied()
    }

    /// Parse a suite from wire format. Unknown suites parse as `None`.
    pub fn parse(input: &[u8]) -> IResult<&[u8], Option<CipherSuite>> {
        let (input, value) = be_u16(input)?;
        Ok((input, CipherSuite::from_u16(value)))
    }

    /// All suites known to this crate.
    pub fn all() -> &'static [CipherSuite] {
        KNOWN
    }

    pub fn as_u16(&self) -> u16 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kex_algo(&self) -> KeyExchangeAlgorithm {
        self.kex
    }

    /// Signature algorithm authenticating the server, `Anonymous` if none.
    pub fn sig_algo(&self) -> SignatureAlgorithm {
        self.sig
    }

    pub fn mac_algo(&self) -> HashAlgorithm {
        self.mac
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x})", self.name, self.id)
    }
}
