use core::ops::{Add, Neg};

/// Bit access to a signed scalar.
///
/// `bit_len` and `bit` describe the magnitude; the sign is reported
/// separately so a negative scalar multiplies the negated point.
pub trait ScalarBits {
    fn bit_len(&self) -> u64;
    fn bit(&self, index: u64) -> bool;
    fn is_negative(&self) -> bool;
}

pub trait Group:
    Sized + Clone + PartialEq + Neg<Output = Self> + for<'a> Add<&'a Self, Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Left-to-right double-and-add over the scalar's bits, most significant
    /// first, starting from the identity.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let base = if scalar.is_negative() {
            self.negate()
        } else {
            self.clone()
        };

        let mut result = Self::identity();
        for index in (0..scalar.bit_len()).rev() {
            result = result.double();
            if scalar.bit(index) {
                result = result + &base;
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::identity();
        for index in (0..u64::BITS - n.leading_zeros()).rev() {
            result = result.double();
            if (n >> index) & 1 == 1 {
                result = result + self;
            }
        }

        result
    }

    fn multi_scalar_mul(points: &[Self], scalars: &[Self::Scalar]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = Self::identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = result + &point.scalar_mul(scalar);
        }
        result
    }
}
