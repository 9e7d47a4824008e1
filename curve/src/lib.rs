//! The E-521 Edwards curve over the Mersenne prime field GF(2^521 - 1).
//!
//! This crate provides the base field, integer scalars with the order of the
//! generator, affine Edwards points with a complete addition law, and a
//! fixed-width signed integer codec used by point and signature encodings.
//! The curve parameters and generator are fixed to the values in the
//! `affine` module.

mod affine;
mod basefield;
pub mod codec;
mod errors;
mod group;
mod msm;
mod random;
mod scalar;

pub use affine::{Affine, POINT_BYTES};
pub use basefield::{modulus, BaseField, ENCODED_BYTES, MODULUS_BITS};
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul_basepoint;
pub use random::{RandomScalar, RANDOM_SCALAR_BYTES};
pub use scalar::Scalar;
