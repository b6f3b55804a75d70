//! Hash and signature algorithm identifiers (RFC 5246 Section 7.4.1.4.1).

use std::fmt;

use nom::number::complete::{be_u16, be_u8};
use nom::IResult;

// ============================================================================
// Hash Algorithms
// ============================================================================

/// Hash half of a TLS 1.2 (hash, signature) pair.
///
/// Also names the MAC hash of a cipher suite, which picks the TLS 1.2 PRF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum HashAlgorithm {
    /// Code 0. A peer pair carrying it counts as "no hash sent".
    None,
    /// Only seen as a legacy suite MAC, never allowed in a signature policy.
    MD5,
    /// Fallback when the peer advertised nothing usable.
    SHA1,
    SHA224,
    SHA256,
    SHA384,
    SHA512,
    /// Code point this crate has no name for. Rejected in peer signatures.
    Unknown(u8),
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::None
    }
}

impl HashAlgorithm {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => HashAlgorithm::None,
            1 => HashAlgorithm::MD5,
            2 => HashAlgorithm::SHA1,
            3 => HashAlgorithm::SHA224,
            4 => HashAlgorithm::SHA256,
            5 => HashAlgorithm::SHA384,
            6 => HashAlgorithm::SHA512,
            _ => HashAlgorithm::Unknown(value),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            HashAlgorithm::None => 0,
            HashAlgorithm::MD5 => 1,
            HashAlgorithm::SHA1 => 2,
            HashAlgorithm::SHA224 => 3,
            HashAlgorithm::SHA256 => 4,
            HashAlgorithm::SHA384 => 5,
            HashAlgorithm::SHA512 => 6,
            HashAlgorithm::Unknown(value) => *value,
        }
    }

    /// Read one hash code. Never fails on unknown codes.
    pub fn parse(input: &[u8]) -> IResult<&[u8], HashAlgorithm> {
        let (input, value) = be_u8(input)?;
        Ok((input, HashAlgorithm::from_u8(value)))
    }

    /// Whether this hash can parameterize a TLS 1.2 signature or PRF.
    pub fn is_sha2(&self) -> bool {
        matches!(
            self,
            HashAlgorithm::SHA224
                | HashAlgorithm::SHA256
                | HashAlgorithm::SHA384
                | HashAlgorithm::SHA512
        )
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::None => write!(f, "None"),
            HashAlgorithm::MD5 => write!(f, "MD5"),
            HashAlgorithm::SHA1 => write!(f, "SHA-1"),
            HashAlgorithm::SHA224 => write!(f, "SHA-224"),
            HashAlgorithm::SHA256 => write!(f, "SHA-256"),
            HashAlgorithm::SHA384 => write!(f, "SHA-384"),
            HashAlgorithm::SHA512 => write!(f, "SHA-512"),
            HashAlgorithm::Unknown(v) => write!(f, "Unknown({})", v),
        }
    }
}

// ============================================================================
// Signature Algorithms
// ============================================================================

/// Signature primitive implemented by a key, or named in a peer's pair.
///
/// Decides the padding: RSA signs with EMSA3, DSA and ECDSA with EMSA1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum SignatureAlgorithm {
    /// Suites without server authentication.
    Anonymous,
    RSA,
    DSA,
    ECDSA,
    Unknown(u8),
}

impl Default for SignatureAlgorithm {
    fn default() -> Self {
        Self::Anonymous
    }
}

impl SignatureAlgorithm {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => SignatureAlgorithm::Anonymous,
            1 => SignatureAlgorithm::RSA,
            2 => SignatureAlgorithm::DSA,
            3 => SignatureAlgorithm::ECDSA,
            _ => SignatureAlgorithm::Unknown(value),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            SignatureAlgorithm::Anonymous => 0,
            SignatureAlgorithm::RSA => 1,
            SignatureAlgorithm::DSA => 2,
            SignatureAlgorithm::ECDSA => 3,
            SignatureAlgorithm::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SignatureAlgorithm> {
        let (input, value) = be_u8(input)?;
        Ok((input, SignatureAlgorithm::from_u8(value)))
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureAlgorithm::Anonymous => write!(f, "Anonymous"),
            SignatureAlgorithm::RSA => write!(f, "RSA"),
            SignatureAlgorithm::DSA => write!(f, "DSA"),
            SignatureAlgorithm::ECDSA => write!(f, "ECDSA"),
            SignatureAlgorithm::Unknown(v) => write!(f, "Unknown({})", v),
        }
    }
}

// ============================================================================
// Signature and Hash pair
// ============================================================================

/// A (hash, signature) pair as advertised in `signature_algorithms`
/// or sent in front of a TLS 1.2 signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignatureAndHashAlgorithm {
    pub hash: HashAlgorithm,
    pub signature: SignatureAlgorithm,
}

impl SignatureAndHashAlgorithm {
    pub fn new(hash: HashAlgorithm, signature: SignatureAlgorithm) -> Self {
        SignatureAndHashAlgorithm { hash, signature }
    }

    pub fn from_u16(value: u16) -> Self {
        let hash = HashAlgorithm::from_u8((value >> 8) as u8);
        let signature = SignatureAlgorithm::from_u8(value as u8);
        SignatureAndHashAlgorithm { hash, signature }
    }

    pub fn as_u16(&self) -> u16 {
        ((self.hash.as_u8() as u16) << 8) | (self.signature.as_u8() as u16)
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SignatureAndHashAlgorithm> {
        let (input, value) = be_u16(input)?;
        Ok((input, SignatureAndHashAlgorithm::from_u16(value)))
    }
}

impl fmt::Display for SignatureAndHashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.signature, self.hash)
    }
}
