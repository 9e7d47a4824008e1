//! Plain hashing and passphrase-keyed tags.

use kmac::kmac_xof256;

use crate::constants::{DIGEST_BITS, HASH_DOMAIN, TAG_DOMAIN};

/// 512-bit hash of `msg`: `KMAC("", m, 512, "D")`.
pub fn hash(msg: &[u8]) -> Vec<u8> {
    kmac_xof256(b"", msg, DIGEST_BITS, HASH_DOMAIN)
}

/// 512-bit authentication tag of `msg` under `passphrase`: `KMAC(pw, m, 512, "T")`.
pub fn authentication_tag(msg: &[u8], passphrase: &[u8]) -> Vec<u8> {
    kmac_xof256(passphrase, msg, DIGEST_BITS, TAG_DOMAIN)
}
