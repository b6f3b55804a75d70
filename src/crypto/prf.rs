use std::fmt;

use crate::types::{HashAlgorithm, ProtocolVersion};
use crate::Error;

/// Key derivation function used for the master secret and key block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prf {
    /// SSL 3.0 MD5/SHA-1 construction.
    Ssl3,
    /// TLS 1.0/1.1 PRF, the XOR of P_MD5 and P_SHA1.
    Tls,
    /// TLS 1.2 PRF, P_hash parameterized by the given hash.
    Tls12(HashAlgorithm),
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prf::Ssl3 => write!(f, "SSL3-PRF"),
            Prf::Tls => write!(f, "TLS-PRF"),
            Prf::Tls12(hash) => write!(f, "TLS-12-PRF({})", hash),
        }
    }
}

/// Select the PRF for a negotiated version and the suite's MAC hash.
///
/// MD5 and SHA-1 suites use SHA-256 under TLS 1.2, which is the floor the
/// TLS 1.2 PRF mandates. The MAC is ignored for versions with a fixed PRF.
pub fn select_prf(version: ProtocolVersion, mac: HashAlgorithm) -> Result<Prf, Error> {
    if version == ProtocolVersion::SSL3_0 {
        return Ok(Prf::Ssl3);
    }

    if version.supports_ciphersuite_specific_prf() {
        return match mac {
            HashAlgorithm::MD5 | HashAlgorithm::SHA1 => Ok(Prf::Tls12(HashAlgorithm::SHA256)),
            hash if hash.is_sha2() => Ok(Prf::Tls12(hash)),
            hash => Err(Error::Internal(format!(
                "No TLS 1.2 PRF for MAC algorithm {}",
                hash
            ))),
        };
    }

    match version {
        ProtocolVersion::TLS1_0 | ProtocolVersion::TLS1_1 | ProtocolVersion::DTLS1_0 => {
            Ok(Prf::Tls)
        }
        _ => Err(Error::Internal(format!("Unknown version code {}", version))),
    }
}
