//! Key objects handed to signature negotiation.
//!
//! Negotiation only needs to know which signature algorithm a key implements.
//! Drivers can implement [`PrivateKey`]/[`PublicKey`] for their own key types;
//! the RustCrypto RSA and ECDSA types are covered here, and
//! [`ParsedPrivateKey`]/[`ParsedPublicKey`] load them from DER or PEM.

use std::fmt;
use std::str;

use pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::types::SignatureAlgorithm;
use crate::Error;

/// A private key used to sign handshake messages.
pub trait PrivateKey {
    /// Signature algorithm implemented by this key.
    fn algorithm(&self) -> SignatureAlgorithm;
}

/// A peer's public key used to verify handshake signatures.
pub trait PublicKey {
    /// Signature algorithm implemented by this key.
    fn algorithm(&self) -> SignatureAlgorithm;
}

impl PrivateKey for RsaPrivateKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::RSA
    }
}

impl PublicKey for RsaPublicKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::RSA
    }
}

impl PrivateKey for p256::ecdsa::SigningKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::ECDSA
    }
}

impl PublicKey for p256::ecdsa::VerifyingKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::ECDSA
    }
}

impl PrivateKey for p384::ecdsa::SigningKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::ECDSA
    }
}

impl PublicKey for p384::ecdsa::VerifyingKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::ECDSA
    }
}

/// Private key loaded from PKCS#8.
pub enum ParsedPrivateKey {
    Rsa(RsaPrivateKey),
    EcdsaP256(p256::ecdsa::SigningKey),
    EcdsaP384(p384::ecdsa::SigningKey),
}

impl ParsedPrivateKey {
    /// Parse a PKCS#8 private key, DER or PEM.
    pub fn try_parse(key_data: &[u8]) -> Result<Self, Error> {
        if let Some(key) = Self::parse_der(key_data) {
            return Ok(key);
        }

        if let Some(der) = pem_to_der(key_data)? {
            if let Some(key) = Self::parse_der(&der) {
                return Ok(key);
            }
        }

        Err(Error::Key(
            "Failed to parse private key in any supported format".into(),
        ))
    }

    fn parse_der(der: &[u8]) -> Option<Self> {
        if let Ok(key) = p256::ecdsa::SigningKey::from_pkcs8_der(der) {
            return Some(ParsedPrivateKey::EcdsaP256(key));
        }
        if let Ok(key) = p384::ecdsa::SigningKey::from_pkcs8_der(der) {
            return Some(ParsedPrivateKey::EcdsaP384(key));
        }
        if let Ok(key) = RsaPrivateKey::from_pkcs8_der(der) {
            return Some(ParsedPrivateKey::Rsa(key));
        }
        None
    }
}

impl PrivateKey for ParsedPrivateKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            ParsedPrivateKey::Rsa(k) => k.algorithm(),
            ParsedPrivateKey::EcdsaP256(k) => k.algorithm(),
            ParsedPrivateKey::EcdsaP384(k) => k.algorithm(),
        }
    }
}

impl fmt::Debug for ParsedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedPrivateKey::Rsa(_) => f.debug_tuple("ParsedPrivateKey::Rsa").finish(),
            ParsedPrivateKey::EcdsaP256(_) => f.debug_tuple("ParsedPrivateKey::EcdsaP256").finish(),
            ParsedPrivateKey::EcdsaP384(_) => f.debug_tuple("ParsedPrivateKey::EcdsaP384").finish(),
        }
    }
}

/// Public key loaded from a SubjectPublicKeyInfo.
#[derive(Debug)]
pub enum ParsedPublicKey {
    Rsa(RsaPublicKey),
    EcdsaP256(p256::ecdsa::VerifyingKey),
    EcdsaP384(p384::ecdsa::VerifyingKey),
}

impl ParsedPublicKey {
    /// Parse a SubjectPublicKeyInfo, DER or PEM.
    pub fn try_parse(key_data: &[u8]) -> Result<Self, Error> {
        if let Some(key) = Self::parse_der(key_data) {
            return Ok(key);
        }

        if let Some(der) = pem_to_der(key_data)? {
            if let Some(key) = Self::parse_der(&der) {
                return Ok(key);
            }
        }

        Err(Error::Key(
            "Failed to parse public key in any supported format".into(),
        ))
    }

    fn parse_der(der: &[u8]) -> Option<Self> {
        if let Ok(key) = p256::ecdsa::VerifyingKey::from_public_key_der(der) {
            return Some(ParsedPublicKey::EcdsaP256(key));
        }
        if let Ok(key) = p384::ecdsa::VerifyingKey::from_public_key_der(der) {
            return Some(ParsedPublicKey::EcdsaP384(key));
        }
        if let Ok(key) = RsaPublicKey::from_public_key_der(der) {
            return Some(ParsedPublicKey::Rsa(key));
        }
        None
    }
}

impl PublicKey for ParsedPublicKey {
    fn algorithm(&self) -> SignatureAlgorithm {
        match self {
            ParsedPublicKey::Rsa(k) => k.algorithm(),
            ParsedPublicKey::EcdsaP256(k) => k.algorithm(),
            ParsedPublicKey::EcdsaP384(k) => k.algorithm(),
        }
    }
}

/// DER contents of a PEM document, `None` if the input is not PEM.
fn pem_to_der(data: &[u8]) -> Result<Option<Vec<u8>>, Error> {
    let Ok(pem) = str::from_utf8(data) else {
        return Ok(None);
    };

    if !pem.contains("-----BEGIN") {
        return Ok(None);
    }

    let (_label, doc) =
        pkcs8::Document::from_pem(pem).map_err(|e| Error::Key(format!("Bad PEM: {}", e)))?;

    Ok(Some(doc.as_bytes().to_vec()))
}
