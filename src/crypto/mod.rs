//! Cryptographic selections made during the handshake.
//!
//! Nothing here runs a primitive. The handshake state decides which PRF,
//! padding and signature encoding apply; a crypto provider executes them.

mod key;
mod prf;
mod signature;

pub use key::{ParsedPrivateKey, ParsedPublicKey, PrivateKey, PublicKey};
pub use prf::{select_prf, Prf};
pub use signature::{Padding, SigFormat, SignatureFormat, SignatureHash};
