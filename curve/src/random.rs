use rand::{CryptoRng, RngCore};

use crate::Scalar;

/// Width of a random scalar in bytes.
pub const RANDOM_SCALAR_BYTES: usize = 64;

/// Helper trait for sampling random scalars.
pub trait RandomScalar: Sized {
    fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomScalar for Scalar {
    /// 512 uniformly random bits read as a non-negative integer.
    #[inline]
    fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; RANDOM_SCALAR_BYTES + 1];
        rng.fill_bytes(&mut bytes[1..]);
        Scalar::from_signed_bytes_be(&bytes)
    }
}
