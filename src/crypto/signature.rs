use std::fmt;

use crate::types::{HashAlgorithm, SignatureAndHashAlgorithm};

/// Digest fed into the signature padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureHash {
    /// No hashing, the input is signed as is (SSL 3.0 client auth).
    Raw,
    /// MD5 || SHA-1 concatenation used before TLS 1.2.
    Md5Sha1,
    Hash(HashAlgorithm),
}

impl fmt::Display for SignatureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureHash::Raw => write!(f, "Raw"),
            SignatureHash::Md5Sha1 => write!(f, "TLS.Digest.0"),
            SignatureHash::Hash(hash) => write!(f, "{}", hash),
        }
    }
}

/// Signature padding/encoding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// PKCS #1 v1.5 signature padding, used with RSA.
    Emsa3(SignatureHash),
    /// Plain hash truncation, used with DSA and ECDSA.
    Emsa1(SignatureHash),
}

impl Padding {
    pub fn hash(&self) -> SignatureHash {
        match self {
            Padding::Emsa3(h) | Padding::Emsa1(h) => *h,
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Emsa3(h) => write!(f, "EMSA3({})", h),
            Padding::Emsa1(h) => write!(f, "EMSA1({})", h),
        }
    }
}

/// How the signature value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureFormat {
    /// Fixed length big endian value.
    Ieee1363,
    /// DER `SEQUENCE { r INTEGER, s INTEGER }`.
    DerSequence,
}

/// Outcome of signature negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigFormat {
    pub padding: Padding,
    pub format: SignatureFormat,
    /// Identifiers to put on the wire. Only set when the version
    /// negotiates signature algorithms.
    pub algorithm: Option<SignatureAndHashAlgorithm>,
}
