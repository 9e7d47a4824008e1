//! Integer scalars and the order of the base point.
//!
//! Scalars are signed arbitrary-precision integers. Arithmetic never reduces
//! implicitly: multiplying a point by `s` and by `s + r` gives the same point,
//! but the scalars compare unequal until [`Scalar::mod_order`] is applied.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::OnceLock;

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::group::ScalarBits;

/// `b` in r = 2^519 - b, big-endian.
const ORDER_OFFSET: [u8; 33] = [
    0x02, 0xea, 0x49, 0x39, 0xb8, 0xb9, 0x03, 0x7a, 0x08, 0xc9, 0x47,
    0x50, 0xa1, 0x81, 0x3a, 0xc0, 0xfb, 0x04, 0x27, 0x3b, 0xa9, 0x65,
    0x70, 0xe0, 0xba, 0xbf, 0x15, 0xdb, 0xca, 0x0a, 0xe7, 0xf2, 0x95,
];

/// Signed integer multiplier for curve points.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scalar(BigInt);

impl Scalar {
    pub fn new(value: BigInt) -> Self {
        Scalar(value)
    }

    pub fn zero() -> Self {
        Scalar(BigInt::from(0u8))
    }

    pub fn one() -> Self {
        Scalar(BigInt::from(1u8))
    }

    /// Order r of the base point, 2^519 - b with b a fixed 258-bit constant.
    pub fn order() -> &'static Scalar {
        static ORDER: OnceLock<Scalar> = OnceLock::new();
        ORDER.get_or_init(|| {
            let offset = BigInt::from_bytes_be(Sign::Plus, &ORDER_OFFSET);
            Scalar((BigInt::from(1u8) << 519u32) - offset)
        })
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }

    /// Least non-negative residue modulo r.
    pub fn mod_order(&self) -> Scalar {
        let r = &Self::order().0;
        let reduced = &self.0 % r;
        if reduced.sign() == Sign::Minus {
            Scalar(reduced + r)
        } else {
            Scalar(reduced)
        }
    }

    /// Multiplies by the cofactor 4.
    pub fn times_four(&self) -> Scalar {
        Scalar(&self.0 << 2u8)
    }

    /// Reads `bytes` as a non-negative big-endian integer.
    pub fn from_unsigned_bytes_be(bytes: &[u8]) -> Self {
        Scalar(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Reads `bytes` as a two's-complement big-endian integer.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Self {
        Scalar(BigInt::from_signed_bytes_be(bytes))
    }

    /// Minimal two's-complement big-endian bytes.
    ///
    /// Positive values whose top bit would be set get a leading zero byte.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        self.0.to_signed_bytes_be()
    }
}

impl ScalarBits for Scalar {
    #[inline]
    fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    #[inline]
    fn bit(&self, index: u64) -> bool {
        self.0.magnitude().bit(index)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar(BigInt::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar(BigInt::from(value))
    }
}

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Self {
        Scalar(value)
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn add(self, rhs: &'b Scalar) -> Scalar {
        Scalar(&self.0 + &rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &'b Scalar) -> Scalar {
        Scalar(&self.0 - &rhs.0)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &'b Scalar) -> Scalar {
        Scalar(&self.0 * &rhs.0)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        &self + &rhs
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        &self - &rhs
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        &self * &rhs
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-&self.0)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.0)
    }
}
