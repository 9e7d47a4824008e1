//! Base field of the curve: integers modulo the Mersenne prime P = 2^521 - 1.
//!
//! Elements are kept as canonical residues in `[0, P)`. Inversion uses
//! Fermat's little theorem and square roots use `P ≡ 3 (mod 4)`.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::OnceLock;

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

/// Bit length of P.
pub const MODULUS_BITS: u64 = 521;

/// Width of one encoded coordinate: P's two's-complement byte length.
pub const ENCODED_BYTES: usize = 66;

/// The field modulus P = 2^521 - 1.
pub fn modulus() -> &'static BigInt {
    static MODULUS: OnceLock<BigInt> = OnceLock::new();
    MODULUS.get_or_init(|| (BigInt::from(1u8) << MODULUS_BITS) - 1u8)
}

/// (P + 1) / 4, the square-root exponent.
fn sqrt_exponent() -> &'static BigInt {
    static EXPONENT: OnceLock<BigInt> = OnceLock::new();
    EXPONENT.get_or_init(|| (modulus() >> 2u8) + 1u8)
}

/// P - 2, the inversion exponent.
fn inverse_exponent() -> &'static BigInt {
    static EXPONENT: OnceLock<BigInt> = OnceLock::new();
    EXPONENT.get_or_init(|| modulus() - 2u8)
}

/// Reduces `value` into `[0, P)` with floor semantics.
fn reduce(value: BigInt) -> BigInt {
    let p = modulus();
    let r = value % p;
    if r.sign() == Sign::Minus {
        r + p
    } else {
        r
    }
}

/// Element of GF(P).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BigInt", into = "BigInt")]
pub struct BaseField(BigInt);

impl BaseField {
    /// Creates an element from any integer, reducing it mod P.
    pub fn new(value: BigInt) -> Self {
        BaseField(reduce(value))
    }

    /// Creates an element only if `value` is already in `[0, P)`.
    pub fn from_canonical(value: BigInt) -> Option<Self> {
        if value.sign() == Sign::Minus || &value >= modulus() {
            None
        } else {
            Some(BaseField(value))
        }
    }

    pub fn from_i64(value: i64) -> Self {
        Self::new(BigInt::from(value))
    }

    pub fn zero() -> Self {
        BaseField(BigInt::from(0u8))
    }

    pub fn one() -> Self {
        BaseField(BigInt::from(1u8))
    }

    /// The canonical representative.
    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }

    /// Least significant bit of the canonical representative.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: &BigInt) -> Self {
        BaseField(self.0.modpow(exponent, modulus()))
    }

    /// Multiplicative inverse via `a^(P-2)`. Zero maps to zero.
    pub fn inverse(&self) -> Self {
        self.pow(inverse_exponent())
    }

    /// Square root whose least significant bit equals `lsb`.
    ///
    /// Returns `None` when `self` is not a quadratic residue. Zero has the
    /// single root zero whatever `lsb` asks for.
    pub fn sqrt(&self, lsb: bool) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }

        let mut root = self.pow(sqrt_exponent());
        if root.is_odd() != lsb {
            root = -root;
        }

        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

impl From<BigInt> for BaseField {
    fn from(value: BigInt) -> Self {
        BaseField::new(value)
    }
}

impl From<BaseField> for BigInt {
    fn from(value: BaseField) -> Self {
        value.0
    }
}

impl From<u64> for BaseField {
    fn from(value: u64) -> Self {
        BaseField::new(BigInt::from(value))
    }
}

impl<'a, 'b> Add<&'b BaseField> for &'a BaseField {
    type Output = BaseField;

    #[inline]
    fn add(self, rhs: &'b BaseField) -> BaseField {
        BaseField::new(&self.0 + &rhs.0)
    }
}

impl<'a, 'b> Sub<&'b BaseField> for &'a BaseField {
    type Output = BaseField;

    #[inline]
    fn sub(self, rhs: &'b BaseField) -> BaseField {
        BaseField::new(&self.0 - &rhs.0)
    }
}

impl<'a, 'b> Mul<&'b BaseField> for &'a BaseField {
    type Output = BaseField;

    #[inline]
    fn mul(self, rhs: &'b BaseField) -> BaseField {
        BaseField::new(&self.0 * &rhs.0)
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Div<&'b BaseField> for &'a BaseField {
    type Output = BaseField;

    #[inline]
    fn div(self, rhs: &'b BaseField) -> BaseField {
        self * &rhs.inverse()
    }
}

impl Neg for &BaseField {
    type Output = BaseField;

    #[inline]
    fn neg(self) -> BaseField {
        BaseField::new(-&self.0)
    }
}

impl Neg for BaseField {
    type Output = BaseField;

    #[inline]
    fn neg(self) -> BaseField {
        -&self
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BaseField> for BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: BaseField) -> BaseField {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a BaseField> for BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: &'a BaseField) -> BaseField {
                $imp::$method(&self, rhs)
            }
        }

        impl<'a> $imp<BaseField> for &'a BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: BaseField) -> BaseField {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);
forward_owned_binop!(Div, div);

impl AddAssign<&BaseField> for BaseField {
    fn add_assign(&mut self, rhs: &BaseField) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&BaseField> for BaseField {
    fn sub_assign(&mut self, rhs: &BaseField) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&BaseField> for BaseField {
    fn mul_assign(&mut self, rhs: &BaseField) {
        *self = &*self * rhs;
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(BaseField::zero() + BaseField::zero(), BaseField::zero());
        assert_eq!(BaseField::one() * BaseField::one(), BaseField::one());
        assert_eq!(BaseField::zero() * BaseField::one(), BaseField::zero());
        assert!(BaseField::zero().is_zero());
    }

    #[test]
    fn test_reduction_is_floor() {
        let minus_one = BaseField::from_i64(-1);
        assert_eq!(minus_one.value(), &(modulus() - 1u8));
        assert_eq!(BaseField::new(modulus().clone()), BaseField::zero());
        assert_eq!(BaseField::new(modulus() + 5u8), BaseField::from(5u64));
    }

    #[test]
    fn test_from_canonical_bounds() {
        assert!(BaseField::from_canonical(modulus() - 1u8).is_some());
        assert!(BaseField::from_canonical(modulus().clone()).is_none());
        assert!(BaseField::from_canonical(BigInt::from(-1)).is_none());
    }

    #[test]
    fn test_arithmetic() {
        let a = BaseField::from(10u64);
        let b = BaseField::from(3u64);
        assert_eq!(&a - &b, BaseField::from(7u64));
        assert_eq!(&b - &a, BaseField::from_i64(-7));
        assert_eq!(&a * &b, BaseField::from(30u64));
        assert_eq!(&a + &(-&a), BaseField::zero());
    }

    #[test]
    fn test_inverse() {
        let a = BaseField::from(376014u64);
        assert_eq!(&a * &a.inverse(), BaseField::one());
        assert_eq!(&BaseField::from(21u64) / &BaseField::from(7u64), BaseField::from(3u64));
        assert_eq!(BaseField::zero().inverse(), BaseField::zero());
    }

    #[test]
    fn test_sqrt_lsb_selection() {
        let root = BaseField::from(1234567u64);
        let square = root.square();

        let even = square.sqrt(false).expect("residue");
        let odd = square.sqrt(true).expect("residue");

        assert!(!even.is_odd());
        assert!(odd.is_odd());
        assert_eq!(even.square(), square);
        assert_eq!(&even + &odd, BaseField::zero());
    }

    #[test]
    fn test_sqrt_of_non_residue() {
        // P ≡ 3 (mod 4), so -1 is not a square.
        assert!(BaseField::from_i64(-1).sqrt(false).is_none());
        assert!(BaseField::from_i64(-1).sqrt(true).is_none());
    }

    #[test]
    fn test_sqrt_of_zero() {
        assert_eq!(BaseField::zero().sqrt(true), Some(BaseField::zero()));
    }
}
