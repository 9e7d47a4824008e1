use crate::group::ScalarBits;
use crate::{Affine, Scalar};

/// Compute a * G + b * P in one interleaved double-and-add pass.
///
/// Both scalars are walked from the top bit down against the shared
/// accumulator, adding G, P or the precomputed G + P at each step.
pub fn double_scalar_mul_basepoint(a: &Scalar, b: &Scalar, point: &Affine) -> Affine {
    let base = if a.is_negative() {
        Affine::generator().negate()
    } else {
        Affine::generator()
    };
    let point = if b.is_negative() {
        point.negate()
    } else {
        point.clone()
    };
    let both = &base + &point;

    let mut result = Affine::identity();
    for index in (0..a.bit_len().max(b.bit_len())).rev() {
        result = result.double();
        match (a.bit(index), b.bit(index)) {
            (true, true) => result += &both,
            (true, false) => result += &base,
            (false, true) => result += &point,
            (false, false) => {}
        }
    }

    result
}
