//! Private keys, public keys and passphrase-derived key pairs.

use curve::{Affine, Group, POINT_BYTES, Scalar};
use kmac::kmac_xof256;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DIGEST_BITS, PRIVATE_KEY_DOMAIN};
use crate::errors::ProtocolError;

/// A secret scalar `s`.
///
/// Derived from a passphrase as `s = 4 * KMAC(pw, "", 512, "K")`, the KMAC
/// output read as an unsigned integer. Multiplying by the cofactor keeps
/// `s * G` in the prime-order subgroup.
///
/// # Example
///
/// ```
/// use protocol::PrivateKey;
///
/// let private_key = PrivateKey::from_passphrase(b"password123");
/// let public_key = private_key.public_key();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    scalar: Scalar,
}

/// A public point `V = s * G`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    point: Affine,
}

/// A private key together with its public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub private: PrivateKey,
    pub public: PublicKey,
}

impl PrivateKey {
    /// Derives the private key for `passphrase`.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        let digest = kmac_xof256(passphrase, b"", DIGEST_BITS, PRIVATE_KEY_DOMAIN);
        Self {
            scalar: Scalar::from_unsigned_bytes_be(&digest).times_four(),
        }
    }

    /// Derives the public key `s * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            point: Affine::generator().scalar_mul(&self.scalar),
        }
    }

    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Minimal two's-complement big-endian bytes of `s`.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.scalar.to_signed_bytes_be()
    }
}

impl PublicKey {
    pub fn point(&self) -> &Affine {
        &self.point
    }

    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        self.point.to_bytes()
    }

    /// Decodes a 132-byte point and checks it lies on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Ok(Self {
            point: Affine::from_bytes(bytes)?,
        })
    }
}

impl KeyPair {
    /// Derives `(s, V)` from `passphrase`.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        let private = PrivateKey::from_passphrase(passphrase);
        let public = private.public_key();
        debug!(passphrase_len = passphrase.len(), "derived key pair");
        Self { private, public }
    }

    /// Export form `V || s`: the 132-byte point followed by the bytes of `s`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.public.to_bytes().to_vec();
        out.extend_from_slice(&self.private.to_bytes());
        out
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private: &PrivateKey) -> Self {
        private.public_key()
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }
}
