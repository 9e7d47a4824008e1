//! Schnorr-style signatures with deterministic nonces.

use curve::codec::encode_fixed;
use curve::{Affine, Group, Scalar};
use kmac::kmac_xof256;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{CHALLENGE_DOMAIN, DIGEST_BITS, NONCE_DOMAIN, SIG_SIZE, SIG_SLOT_SIZE};
use crate::errors::ProtocolError;
use crate::keys::{PrivateKey, PublicKey};
use crate::stream::tags_match;

/// A signature `(h, z)`, each held in its 65-byte sign-extended slot.
///
/// The signature satisfies `h == H(Ux, m)` where `U = z * G + h * V` and
/// `H` is `0x00 || KMAC(Ux, m, 512, "T")` read as an integer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Signature {
    h: [u8; SIG_SLOT_SIZE],
    z: [u8; SIG_SLOT_SIZE],
}

/// Computes the challenge slot `0x00 || KMAC(Ux, m, 512, "T")`.
///
/// The leading zero byte keeps `h` non-negative, so the slot is also its
/// fixed-width encoding.
pub(crate) fn hash_challenge(u: &Affine, msg: &[u8]) -> [u8; SIG_SLOT_SIZE] {
    let ux = u.x().value().to_signed_bytes_be();
    let digest = kmac_xof256(&ux, msg, DIGEST_BITS, CHALLENGE_DOMAIN);

    let mut slot = [0u8; SIG_SLOT_SIZE];
    slot[1..].copy_from_slice(&digest);
    slot
}

fn to_slot(value: &Scalar) -> Result<[u8; SIG_SLOT_SIZE], ProtocolError> {
    let bytes = encode_fixed(value.value(), SIG_SLOT_SIZE)?;
    let mut slot = [0u8; SIG_SLOT_SIZE];
    slot.copy_from_slice(&bytes);
    Ok(slot)
}

/// Signs `msg` under the key derived from `passphrase`.
pub fn sign(passphrase: &[u8], msg: &[u8]) -> Result<Signature, ProtocolError> {
    PrivateKey::from_passphrase(passphrase).sign(msg)
}

impl PrivateKey {
    /// Signs a message.
    ///
    /// 1. `k = 4 * KMAC(s, m, 512, "N")`
    /// 2. `U = k * G`
    /// 3. `h = 0x00 || KMAC(Ux, m, 512, "T")`
    /// 4. `z = (k - h * s) mod r`
    ///
    /// The nonce depends only on the key and the message, so signing the same
    /// message twice gives the same signature.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature, ProtocolError> {
        let nonce = kmac_xof256(&self.to_bytes(), msg, DIGEST_BITS, NONCE_DOMAIN);
        let k = Scalar::from_unsigned_bytes_be(&nonce).times_four();
        let u = Affine::generator().scalar_mul(&k);

        let h = hash_challenge(&u, msg);
        let z = (&k - &(&Scalar::from_signed_bytes_be(&h) * self.scalar())).mod_order();

        debug!(msg_len = msg.len(), "signed message");
        Ok(Signature {
            h,
            z: to_slot(&z)?,
        })
    }
}

impl PublicKey {
    /// Verifies a signature on a message.
    ///
    /// Recomputes `U = z * G + h * V` and accepts when the challenge of `U`
    /// matches the received `h` slot byte for byte.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> Result<bool, ProtocolError> {
        let h = Scalar::from_signed_bytes_be(&sig.h);
        let z = Scalar::from_signed_bytes_be(&sig.z);
        let u = Affine::double_scalar_mul_basepoint(&z, &h, self.point());

        let valid = tags_match(&hash_challenge(&u, msg), &sig.h);
        if !valid {
            warn!(msg_len = msg.len(), "signature rejected");
        }
        Ok(valid)
    }
}

impl Signature {
    /// The 65-byte `h` slot.
    pub fn h(&self) -> &[u8; SIG_SLOT_SIZE] {
        &self.h
    }

    /// The 65-byte `z` slot.
    pub fn z(&self) -> &[u8; SIG_SLOT_SIZE] {
        &self.z
    }

    /// `h || z`, 130 bytes.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..SIG_SLOT_SIZE].copy_from_slice(&self.h);
        out[SIG_SLOT_SIZE..].copy_from_slice(&self.z);
        out
    }

    /// Splits a 130-byte signature into its slots.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < SIG_SIZE {
            return Err(ProtocolError::Truncated {
                what: "signature",
                minimum: SIG_SIZE,
                actual: bytes.len(),
            });
        }
        if bytes.len() > SIG_SIZE {
            return Err(curve::CurveError::InvalidLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let mut h = [0u8; SIG_SLOT_SIZE];
        let mut z = [0u8; SIG_SLOT_SIZE];
        h.copy_from_slice(&bytes[..SIG_SLOT_SIZE]);
        z.copy_from_slice(&bytes[SIG_SLOT_SIZE..]);
        Ok(Self { h, z })
    }
}

impl From<Signature> for Vec<u8> {
    fn from(sig: Signature) -> Self {
        sig.to_bytes().to_vec()
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = ProtocolError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Signature::from_bytes(&bytes)
    }
}
