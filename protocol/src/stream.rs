//! Keystream encryption and tagging shared by the hybrid and symmetric modes.
//!
//! Both modes stretch a secret into `ke || ka` with one KMAC call, encrypt by
//! XOR with a KMAC keystream under `ke`, and authenticate the plaintext with a
//! KMAC tag under `ka`. They differ only in the secret and the domain strings.

use kmac::kmac_xof256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{DIGEST_BITS, KEY_MATERIAL_BITS, TAG_SIZE};

/// Encryption and authentication keys, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct SessionKeys {
    encryption: Vec<u8>,
    authentication: Vec<u8>,
}

impl SessionKeys {
    /// `ke || ka = KMAC(secret, "", 1024, domain)`, split in halves.
    pub(crate) fn derive(secret: &[u8], domain: &[u8]) -> Self {
        let mut material = kmac_xof256(secret, b"", KEY_MATERIAL_BITS, domain);
        let authentication = material.split_off(material.len() / 2);
        SessionKeys {
            encryption: material,
            authentication,
        }
    }

    /// XORs `data` with `KMAC(ke, "", 8 * |data|, domain)`.
    pub(crate) fn apply_keystream(&self, data: &[u8], domain: &[u8]) -> Vec<u8> {
        let mut keystream = kmac_xof256(&self.encryption, b"", 8 * data.len(), domain);
        for (k, d) in keystream.iter_mut().zip(data) {
            *k ^= d;
        }
        keystream
    }

    /// `KMAC(ka, message, 512, domain)`.
    pub(crate) fn tag(&self, message: &[u8], domain: &[u8]) -> [u8; TAG_SIZE] {
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&kmac_xof256(&self.authentication, message, DIGEST_BITS, domain));
        tag
    }
}

/// Compares two byte strings in time that depends only on their lengths.
pub(crate) fn tags_match(expected: &[u8], received: &[u8]) -> bool {
    if expected.len() != received.len() {
        return false;
    }

    let diff = expected
        .iter()
        .zip(received)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b));
    diff == 0
}
