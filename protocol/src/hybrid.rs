//! ECDHIES-style hybrid encryption to a public key.

use curve::{Affine, Group, POINT_BYTES, RandomScalar, Scalar};
use rand::CryptoRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::constants::{
    HYBRID_AUTH_DOMAIN, HYBRID_ENCRYPT_DOMAIN, HYBRID_KEY_DOMAIN, MIN_CRYPTOGRAM_SIZE, TAG_SIZE,
};
use crate::errors::ProtocolError;
use crate::keys::{PrivateKey, PublicKey};
use crate::stream::{SessionKeys, tags_match};

/// Output of [`PublicKey::encrypt`]: ephemeral point, ciphertext and tag.
///
/// Serialized as `Z (132 bytes) || c || t (64 bytes)`; the ciphertext has the
/// plaintext's length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Cryptogram {
    pub z: Affine,
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_SIZE],
}

/// Keys shared through the Diffie-Hellman point `W`.
fn shared_keys(w: &Affine) -> SessionKeys {
    SessionKeys::derive(&w.x().value().to_signed_bytes_be(), HYBRID_KEY_DOMAIN)
}

impl PublicKey {
    /// Encrypts `msg` to this key.
    ///
    /// 1. `k = 4 * random(512 bits)`
    /// 2. `W = k * V`, `Z = k * G`
    /// 3. `ke || ka = KMAC(Wx, "", 1024, "P")`
    /// 4. `c = KMAC(ke, "", |m|, "PKE") XOR m`
    /// 5. `t = KMAC(ka, m, 512, "PKA")`
    pub fn encrypt<R: CryptoRng + ?Sized>(&self, rng: &mut R, msg: &[u8]) -> Cryptogram {
        let k = Scalar::random(rng).times_four();
        let w = self.point().scalar_mul(&k);
        let z = Affine::generator().scalar_mul(&k);

        let keys = shared_keys(&w);
        let ciphertext = keys.apply_keystream(msg, HYBRID_ENCRYPT_DOMAIN);
        let tag = keys.tag(msg, HYBRID_AUTH_DOMAIN);

        debug!(msg_len = msg.len(), "hybrid encryption");
        Cryptogram {
            z,
            ciphertext,
            tag,
        }
    }
}

impl PrivateKey {
    /// Decrypts a cryptogram addressed to this key.
    ///
    /// Returns [`ProtocolError::AuthenticationFailed`] when the recomputed tag
    /// differs; the candidate plaintext is wiped before returning.
    pub fn decrypt(&self, cryptogram: &Cryptogram) -> Result<Vec<u8>, ProtocolError> {
        let w = cryptogram.z.scalar_mul(self.scalar());

        let keys = shared_keys(&w);
        let mut msg = keys.apply_keystream(&cryptogram.ciphertext, HYBRID_ENCRYPT_DOMAIN);
        let tag = keys.tag(&msg, HYBRID_AUTH_DOMAIN);

        if !tags_match(&tag, &cryptogram.tag) {
            msg.zeroize();
            warn!(len = cryptogram.ciphertext.len(), "hybrid tag mismatch");
            return Err(ProtocolError::AuthenticationFailed);
        }

        Ok(msg)
    }
}

impl Cryptogram {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_CRYPTOGRAM_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.z.to_bytes());
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parses `Z || c || t`, taking the ciphertext length from the total.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < MIN_CRYPTOGRAM_SIZE {
            return Err(ProtocolError::Truncated {
                what: "cryptogram",
                minimum: MIN_CRYPTOGRAM_SIZE,
                actual: bytes.len(),
            });
        }

        let (z, rest) = bytes.split_at(POINT_BYTES);
        let (ciphertext, tag_bytes) = rest.split_at(rest.len() - TAG_SIZE);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(tag_bytes);

        Ok(Self {
            z: Affine::from_bytes(z)?,
            ciphertext: ciphertext.to_vec(),
            tag,
        })
    }
}

impl From<Cryptogram> for Vec<u8> {
    fn from(cryptogram: Cryptogram) -> Self {
        cryptogram.to_bytes()
    }
}

impl TryFrom<Vec<u8>> for Cryptogram {
    type Error = ProtocolError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Cryptogram::from_bytes(&bytes)
    }
}
