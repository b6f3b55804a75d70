use tinyvec::ArrayVec;

use crate::types::HashAlgorithm;
use crate::Error;

const MAX_SIGNATURE_HASHES: usize = 8;

/// Local negotiation preferences consulted by the signature negotiator.
pub trait Policy {
    /// Acceptable signature hashes, most preferred first.
    fn allowed_signature_hashes(&self) -> &[HashAlgorithm];
}

/// Handshake configuration
#[derive(Debug, Clone)]
pub struct Config {
    allowed_signature_hashes: ArrayVec<[HashAlgorithm; MAX_SIGNATURE_HASHES]>,
}

impl Config {
    /// Create a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            allowed_signature_hashes: vec![
                HashAlgorithm::SHA512,
                HashAlgorithm::SHA384,
                HashAlgorithm::SHA256,
                HashAlgorithm::SHA224,
                HashAlgorithm::SHA1,
            ],
        }
    }

    /// Signature hashes we are willing to use, most preferred first.
    #[inline(always)]
    pub fn allowed_signature_hashes(&self) -> &[HashAlgorithm] {
        &self.allowed_signature_hashes
    }
}

impl Policy for Config {
    fn allowed_signature_hashes(&self) -> &[HashAlgorithm] {
        Config::allowed_signature_hashes(self)
    }
}

/// Builder for handshake configuration.
pub struct ConfigBuilder {
    allowed_signature_hashes: Vec<HashAlgorithm>,
}

impl ConfigBuilder {
    /// Set the acceptable signature hashes, most preferred first.
    ///
    /// Defaults to SHA-512, SHA-384, SHA-256, SHA-224, SHA-1.
    pub fn allowed_signature_hashes(mut self, hashes: &[HashAlgorithm]) -> Self {
        self.allowed_signature_hashes = hashes.to_vec();
        self
    }

    /// Build the configuration.
    ///
    /// Returns `Error::Config` if the hash list is empty, too long, contains
    /// duplicates, or names a hash that cannot parameterize a TLS signature.
    pub fn build(self) -> Result<Config, Error> {
        let hashes = self.allowed_signature_hashes;

        if hashes.is_empty() {
            return Err(Error::Config("No signature hashes allowed".into()));
        }

        if hashes.len() > MAX_SIGNATURE_HASHES {
            return Err(Error::Config(format!(
                "At most {} signature hashes allowed, got {}",
                MAX_SIGNATURE_HASHES,
                hashes.len()
            )));
        }

        let mut allowed_signature_hashes = ArrayVec::new();

        for hash in hashes {
            if !hash.is_sha2() && hash != HashAlgorithm::SHA1 {
                return Err(Error::Config(format!(
                    "{} is not usable as a signature hash",
                    hash
                )));
            }
            if allowed_signature_hashes.contains(&hash) {
                return Err(Error::Config(format!("Duplicate signature hash {}", hash)));
            }
            allowed_signature_hashes.push(hash);
        }

        Ok(Config {
            allowed_signature_hashes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder()
            .build()
            .expect("Default config should always validate")
    }
}
