//! Sizes and domain-separation strings shared by every protocol operation.

use curve::POINT_BYTES;

/// Size of a serialized public key: one encoded curve point.
pub const PK_SIZE: usize = POINT_BYTES;

/// Size of an authentication tag in bytes.
pub const TAG_SIZE: usize = 64;

/// Size of the symmetric-mode nonce in bytes.
pub const NONCE_SIZE: usize = 64;

/// Width of each of the two signature slots.
pub const SIG_SLOT_SIZE: usize = 65;

/// Size of a serialized signature: `h` and `z` slots back to back.
pub const SIG_SIZE: usize = 2 * SIG_SLOT_SIZE;

/// Smallest hybrid cryptogram: an empty message still carries Z and the tag.
pub const MIN_CRYPTOGRAM_SIZE: usize = POINT_BYTES + TAG_SIZE;

/// Smallest symmetric cryptogram: nonce and tag around an empty ciphertext.
pub const MIN_SYMMETRIC_CRYPTOGRAM_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Output length of scalar derivations and tags, in bits.
pub(crate) const DIGEST_BITS: usize = 512;

/// Output length of the `ke || ka` derivation, in bits.
pub(crate) const KEY_MATERIAL_BITS: usize = 1024;

pub(crate) const PRIVATE_KEY_DOMAIN: &[u8] = b"K";
pub(crate) const NONCE_DOMAIN: &[u8] = b"N";
pub(crate) const CHALLENGE_DOMAIN: &[u8] = b"T";
pub(crate) const HASH_DOMAIN: &[u8] = b"D";
pub(crate) const TAG_DOMAIN: &[u8] = b"T";

pub(crate) const HYBRID_KEY_DOMAIN: &[u8] = b"P";
pub(crate) const HYBRID_ENCRYPT_DOMAIN: &[u8] = b"PKE";
pub(crate) const HYBRID_AUTH_DOMAIN: &[u8] = b"PKA";

pub(crate) const SYMMETRIC_KEY_DOMAIN: &[u8] = b"S";
pub(crate) const SYMMETRIC_ENCRYPT_DOMAIN: &[u8] = b"SKE";
pub(crate) const SYMMETRIC_AUTH_DOMAIN: &[u8] = b"SKA";
