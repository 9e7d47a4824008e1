//! Public-key and symmetric cryptography over E-521, keyed entirely by KMAC.
//!
//! This library composes the `kmac` and `curve` crates into:
//! - Passphrase-derived key pairs `(s, V = s * G)`
//! - Schnorr-style signatures with deterministic nonces
//! - ECDHIES-style hybrid encryption to a public key
//! - Symmetric authenticated encryption under a passphrase
//! - A plain 512-bit hash and a passphrase-keyed authentication tag
//!
//! # Overview
//!
//! Every secret is stretched with one KMACXOF256 call into an encryption key
//! `ke` and an authentication key `ka`. Messages are encrypted by XOR with a
//! KMAC keystream under `ke` and authenticated with a 512-bit KMAC tag under
//! `ka`. Decryption recomputes the tag and releases no plaintext on mismatch.
//!
//! # Example
//!
//! ```
//! use protocol::{KeyPair, Cryptogram};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let key_pair = KeyPair::from_passphrase(b"password123");
//!
//! // Hybrid encryption round trip
//! let cryptogram = key_pair.public.encrypt(&mut rng, b"test message");
//! let decoded = Cryptogram::from_bytes(&cryptogram.to_bytes()).expect("decode");
//! let plaintext = key_pair.private.decrypt(&decoded).expect("decrypt");
//! assert_eq!(plaintext, b"test message");
//!
//! // Sign and verify
//! let signature = key_pair.private.sign(b"test message").expect("sign");
//! let is_valid = key_pair.public.verify(b"test message", &signature).expect("verify");
//! assert!(is_valid);
//! ```
//!
//! # Security Considerations
//!
//! - No resistance to timing or cache side channels is claimed
//! - Key pairs are as strong as the passphrase they are derived from
//! - Use a cryptographically secure random number generator for encryption
//! - The sponge and cSHAKE edge cases follow this system's own outputs, not
//!   SP 800-185 (see the `kmac` crate)

mod constants;
pub mod digest;
mod errors;
mod hybrid;
mod keys;
mod session;
mod signatures;
mod stream;
pub mod symmetric;

#[cfg(test)]
mod tests;

pub use constants::{
    MIN_CRYPTOGRAM_SIZE, MIN_SYMMETRIC_CRYPTOGRAM_SIZE, NONCE_SIZE, PK_SIZE, SIG_SIZE,
    SIG_SLOT_SIZE, TAG_SIZE,
};
pub use errors::ProtocolError;
pub use hybrid::Cryptogram;
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use session::Session;
pub use signatures::{Signature, sign};
pub use symmetric::SymmetricCryptogram;
