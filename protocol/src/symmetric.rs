//! Passphrase-keyed authenticated encryption built on KMAC alone.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::constants::{
    MIN_SYMMETRIC_CRYPTOGRAM_SIZE, NONCE_SIZE, SYMMETRIC_AUTH_DOMAIN, SYMMETRIC_ENCRYPT_DOMAIN,
    SYMMETRIC_KEY_DOMAIN, TAG_SIZE,
};
use crate::errors::ProtocolError;
use crate::stream::{SessionKeys, tags_match};

/// Output of [`encrypt`]: nonce, ciphertext and tag, serialized as `z || c || t`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct SymmetricCryptogram {
    pub nonce: [u8; NONCE_SIZE],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_SIZE],
}

/// `ke || ka = KMAC(z || pw, "", 1024, "S")`.
fn passphrase_keys(nonce: &[u8; NONCE_SIZE], passphrase: &[u8]) -> SessionKeys {
    let mut secret = Zeroizing::new(Vec::with_capacity(NONCE_SIZE + passphrase.len()));
    secret.extend_from_slice(nonce);
    secret.extend_from_slice(passphrase);
    SessionKeys::derive(&secret, SYMMETRIC_KEY_DOMAIN)
}

/// Encrypts `msg` under `passphrase` with a fresh 512-bit nonce.
pub fn encrypt<R: CryptoRng + ?Sized>(
    rng: &mut R,
    msg: &[u8],
    passphrase: &[u8],
) -> SymmetricCryptogram {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);

    let keys = passphrase_keys(&nonce, passphrase);
    let ciphertext = keys.apply_keystream(msg, SYMMETRIC_ENCRYPT_DOMAIN);
    let tag = keys.tag(msg, SYMMETRIC_AUTH_DOMAIN);

    debug!(msg_len = msg.len(), "symmetric encryption");
    SymmetricCryptogram {
        nonce,
        ciphertext,
        tag,
    }
}

/// Decrypts a cryptogram produced by [`encrypt`] under the same passphrase.
pub fn decrypt(
    cryptogram: &SymmetricCryptogram,
    passphrase: &[u8],
) -> Result<Vec<u8>, ProtocolError> {
    let keys = passphrase_keys(&cryptogram.nonce, passphrase);
    let mut msg = keys.apply_keystream(&cryptogram.ciphertext, SYMMETRIC_ENCRYPT_DOMAIN);
    let tag = keys.tag(&msg, SYMMETRIC_AUTH_DOMAIN);

    if !tags_match(&tag, &cryptogram.tag) {
        msg.zeroize();
        warn!(len = cryptogram.ciphertext.len(), "symmetric tag mismatch");
        return Err(ProtocolError::AuthenticationFailed);
    }

    Ok(msg)
}

impl SymmetricCryptogram {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_SYMMETRIC_CRYPTOGRAM_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parses `z || c || t`, taking the ciphertext length from the total.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() < MIN_SYMMETRIC_CRYPTOGRAM_SIZE {
            return Err(ProtocolError::Truncated {
                what: "symmetric cryptogram",
                minimum: MIN_SYMMETRIC_CRYPTOGRAM_SIZE,
                actual: bytes.len(),
            });
        }

        let (nonce_bytes, rest) = bytes.split_at(NONCE_SIZE);
        let (ciphertext, tag_bytes) = rest.split_at(rest.len() - TAG_SIZE);

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(nonce_bytes);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(tag_bytes);

        Ok(Self {
            nonce,
            ciphertext: ciphertext.to_vec(),
            tag,
        })
    }
}

impl From<SymmetricCryptogram> for Vec<u8> {
    fn from(cryptogram: SymmetricCryptogram) -> Self {
        cryptogram.to_bytes()
    }
}

impl TryFrom<Vec<u8>> for SymmetricCryptogram {
    type Error = ProtocolError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        SymmetricCryptogram::from_bytes(&bytes)
    }
}
