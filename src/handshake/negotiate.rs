//! Signature hash and format negotiation.

use super::HandshakeState;
use crate::config::Policy;
use crate::crypto::{Padding, PrivateKey, PublicKey, SigFormat, SignatureFormat, SignatureHash};
use crate::types::{HashAlgorithm, ProtocolVersion, SignatureAlgorithm, SignatureAndHashAlgorithm};
use crate::Error;

/// Choose the hash for a signature made with `sig_algo`.
///
/// Before TLS 1.2 the hash is implied by the version and algorithm. From
/// TLS 1.2 on it is our most preferred hash that the peer advertised
/// together with `sig_algo`, or SHA-1 if there is none.
pub fn choose_hash<P: Policy + ?Sized>(
    sig_algo: SignatureAlgorithm,
    version: ProtocolVersion,
    policy: &P,
    for_client_auth: bool,
    peer_algos: &[SignatureAndHashAlgorithm],
) -> Result<SignatureHash, Error> {
    if !version.supports_negotiable_signature_algorithms() {
        if for_client_auth && version == ProtocolVersion::SSL3_0 {
            return Ok(SignatureHash::Raw);
        }

        return match sig_algo {
            SignatureAlgorithm::RSA => Ok(SignatureHash::Md5Sha1),
            SignatureAlgorithm::DSA | SignatureAlgorithm::ECDSA => {
                Ok(SignatureHash::Hash(HashAlgorithm::SHA1))
            }
            _ => Err(Error::Internal(format!(
                "Unknown TLS signature algo {}",
                sig_algo
            ))),
        };
    }

    for hash in policy.allowed_signature_hashes() {
        let advertised = peer_algos
            .iter()
            .any(|a| a.hash == *hash && a.signature == sig_algo);

        if advertised {
            return Ok(SignatureHash::Hash(*hash));
        }
    }

    // TLS 1.2 default when the peer sent nothing we can use
    Ok(SignatureHash::Hash(HashAlgorithm::SHA1))
}

fn padding_for(
    sig_algo: SignatureAlgorithm,
    hash: SignatureHash,
) -> Result<(Padding, SignatureFormat), Error> {
    match sig_algo {
        SignatureAlgorithm::RSA => Ok((Padding::Emsa3(hash), SignatureFormat::Ieee1363)),
        SignatureAlgorithm::DSA | SignatureAlgorithm::ECDSA => {
            Ok((Padding::Emsa1(hash), SignatureFormat::DerSequence))
        }
        _ => Err(Error::InvalidArgument(format!(
            "{} is invalid/unknown for TLS signatures",
            sig_algo
        ))),
    }
}

impl HandshakeState {
    /// Signature parameters for a signature we make with `key`.
    ///
    /// The peer's preferences come from the client hello when authenticating
    /// the server, and from the certificate request for client auth.
    pub fn choose_sig_format<K, P>(
        &self,
        key: &K,
        for_client_auth: bool,
        policy: &P,
    ) -> Result<SigFormat, Error>
    where
        K: PrivateKey + ?Sized,
        P: Policy + ?Sized,
    {
        let sig_algo = key.algorithm();

        let peer_algos = if for_client_auth {
            self.cert_req().map(|r| r.supported_algorithms())
        } else {
            self.client_hello().map(|c| c.supported_algorithms())
        };

        let hash = choose_hash(
            sig_algo,
            self.version(),
            policy,
            for_client_auth,
            peer_algos.unwrap_or(&[]),
        )?;

        let (padding, format) = padding_for(sig_algo, hash)?;

        let algorithm = match hash {
            SignatureHash::Hash(h) if self.version().supports_negotiable_signature_algorithms() => {
                Some(SignatureAndHashAlgorithm::new(h, sig_algo))
            }
            _ => None,
        };

        debug!("Signing with {} ({:?})", padding, format);

        Ok(SigFormat {
            padding,
            format,
            algorithm,
        })
    }

    /// Signature parameters for verifying a peer signature made with `key`.
    ///
    /// `algorithm` is what the peer sent in front of the signature, `None` if
    /// it sent no identifiers.
    pub fn understand_sig_format<K>(
        &self,
        key: &K,
        algorithm: Option<SignatureAndHashAlgorithm>,
        for_client_auth: bool,
    ) -> Result<SigFormat, Error>
    where
        K: PublicKey + ?Sized,
    {
        let key_algo = key.algorithm();
        let version = self.version();
        let negotiable = version.supports_negotiable_signature_algorithms();

        // Only consistency with the key is checked. The claimed pair is not
        // matched against what we advertised in our hello or certificate
        // request, so peers using a pair we did not offer are still accepted.
        let sent_hash = if negotiable {
            let pair = match algorithm {
                Some(pair)
                    if !matches!(pair.hash, HashAlgorithm::None | HashAlgorithm::Unknown(_)) =>
                {
                    pair
                }
                _ => {
                    warn!("Peer sent no hash/signature identifiers with {}", version);
                    return Err(Error::Decoding(
                        "Counterparty did not send hash/sig IDs".into(),
                    ));
                }
            };

            if pair.signature != key_algo {
                warn!("Peer signature {} does not match {} key", pair, key_algo);
                return Err(Error::Decoding(
                    "Counterparty sent inconsistent key and sig types".into(),
                ));
            }

            Some(pair.hash)
        } else {
            if let Some(pair) = algorithm {
                warn!("Peer sent identifiers {} with {}", pair, version);
                return Err(Error::Decoding(
                    "Counterparty sent hash/sig IDs with old version".into(),
                ));
            }

            None
        };

        let ssl3_client_auth = for_client_auth && version == ProtocolVersion::SSL3_0;

        let hash = match key_algo {
            SignatureAlgorithm::RSA if ssl3_client_auth => SignatureHash::Raw,
            SignatureAlgorithm::RSA => match sent_hash {
                Some(h) => SignatureHash::Hash(h),
                None => SignatureHash::Md5Sha1,
            },
            SignatureAlgorithm::DSA if ssl3_client_auth => SignatureHash::Raw,
            SignatureAlgorithm::DSA | SignatureAlgorithm::ECDSA => match sent_hash {
                Some(h) => SignatureHash::Hash(h),
                None => SignatureHash::Hash(HashAlgorithm::SHA1),
            },
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "{} is invalid/unknown for TLS signatures",
                    key_algo
                )))
            }
        };

        let (padding, format) = padding_for(key_algo, hash)?;

        debug!("Verifying with {} ({:?})", padding, format);

        Ok(SigFormat {
            padding,
            format,
            algorithm: if negotiable { algorithm } else { None },
        })
    }
}
