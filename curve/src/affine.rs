// E-521 : x^2 + y^2 = 1 + d*x^2*y^2 over GF(2^521 - 1), d = -376014
// Generator: x = 4, y the even root
// Generator order r = 2^519 - 337554763258501705789107630418782636071904961214051226618635150085779108655765
// Cofactor: 4

use crate::basefield::{BaseField, ENCODED_BYTES};
use crate::{double_scalar_mul_basepoint, CurveError, Group, Scalar};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Encoded size of a point: two fixed-width coordinates.
pub const POINT_BYTES: usize = 2 * ENCODED_BYTES;

/// Even y-coordinate of the generator, big-endian.
const GENERATOR_Y: [u8; ENCODED_BYTES] = [
    0x01, 0x1d, 0xd4, 0xb4, 0x95, 0x2f, 0x9b, 0x74, 0x1b, 0xdb, 0x15,
    0xc8, 0x06, 0xd2, 0x40, 0x13, 0xb3, 0xeb, 0xf3, 0xbe, 0x43, 0x29,
    0x59, 0x04, 0xd1, 0xe4, 0x05, 0x0b, 0x3c, 0x80, 0xf5, 0x92, 0x0a,
    0x14, 0x56, 0x16, 0xeb, 0xb4, 0x81, 0x55, 0x7d, 0x7b, 0xfa, 0x95,
    0x5c, 0xbf, 0xb1, 0xcf, 0xd4, 0xe0, 0x64, 0xb0, 0xde, 0x40, 0xf9,
    0x3e, 0x22, 0xf8, 0xbc, 0xdf, 0xb4, 0x1d, 0x00, 0x93, 0xb1, 0x0c,
];

/// Affine point on the Edwards curve.
///
/// The neutral element is (0, 1) and needs no special flag: the addition law
/// is complete, so every pair of points, equal or not, goes through the same
/// formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Affine {
    x: BaseField,
    y: BaseField,
}

impl Affine {
    #[inline]
    fn curve_d() -> &'static BaseField {
        static D: OnceLock<BaseField> = OnceLock::new();
        D.get_or_init(|| BaseField::from_i64(-376014))
    }

    /// The neutral element (0, 1).
    pub fn identity() -> Self {
        Affine {
            x: BaseField::zero(),
            y: BaseField::one(),
        }
    }

    /// Creates a point, rejecting coordinates off the curve.
    pub fn new(x: BaseField, y: BaseField) -> Result<Self, CurveError> {
        let point = Affine { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::InvalidPoint)
        }
    }

    /// Creates a point from raw coordinates without checking the curve equation.
    pub fn new_unchecked(x: BaseField, y: BaseField) -> Self {
        Affine { x, y }
    }

    /// Decompresses `(x, lsb(y))` by solving y^2 = (1 - x^2) / (1 - d*x^2).
    pub fn from_x(x: &BaseField, lsb: bool) -> Result<Self, CurveError> {
        let x2 = x.square();
        let numerator = BaseField::one() - &x2;
        let denominator = BaseField::one() - Self::curve_d() * &x2;
        let y = (numerator / denominator)
            .sqrt(lsb)
            .ok_or(CurveError::InvalidPoint)?;

        Ok(Affine { x: x.clone(), y })
    }

    /// The x-coordinate and the parity of y.
    pub fn compress(&self) -> (BaseField, bool) {
        (self.x.clone(), self.y.is_odd())
    }

    #[inline]
    pub fn x(&self) -> &BaseField {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BaseField {
        &self.y
    }

    /// Check if a point is on the curve: x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = &x2 + &y2;
        let rhs = BaseField::one() + Self::curve_d() * &x2 * &y2;

        lhs == rhs
    }

    /// The fixed generator G = (4, even y).
    pub fn generator() -> Self {
        static GENERATOR: OnceLock<Affine> = OnceLock::new();
        GENERATOR
            .get_or_init(|| Affine {
                x: BaseField::from(4u64),
                y: BaseField::new(BigInt::from_bytes_be(Sign::Plus, &GENERATOR_Y)),
            })
            .clone()
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        self + self
    }

    /// Negate a point: (x, y) -> (-x, y).
    pub fn negate(&self) -> Self {
        Affine {
            x: -&self.x,
            y: self.y.clone(),
        }
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &Scalar, b: &Scalar, point: &Self) -> Self {
        double_scalar_mul_basepoint(a, b, point)
    }

    /// Both coordinates as 66-byte big-endian slots.
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        let mut out = [0u8; POINT_BYTES];
        for (slot, coordinate) in out.chunks_exact_mut(ENCODED_BYTES).zip([&self.x, &self.y]) {
            // Canonical residues are below 2^521 and never negative.
            let digits = coordinate.value().to_signed_bytes_be();
            slot[ENCODED_BYTES - digits.len()..].copy_from_slice(&digits);
        }
        out
    }

    /// Decodes and validates a point written by [`Affine::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != POINT_BYTES {
            return Err(CurveError::InvalidLength {
                expected: POINT_BYTES,
                actual: bytes.len(),
            });
        }

        let (x, y) = bytes.split_at(ENCODED_BYTES);
        let x = BaseField::from_canonical(crate::codec::decode_fixed(x))
            .ok_or(CurveError::InvalidPoint)?;
        let y = BaseField::from_canonical(crate::codec::decode_fixed(y))
            .ok_or(CurveError::InvalidPoint)?;

        Affine::new(x, y)
    }
}

impl Group for Affine {
    type Scalar = Scalar;

    #[inline]
    fn identity() -> Self {
        Affine::identity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == BaseField::one()
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl<'a, 'b> Add<&'b Affine> for &'a Affine {
    type Output = Affine;

    fn add(self, other: &'b Affine) -> Affine {
        let x1y2 = &self.x * &other.y;
        let y1x2 = &self.y * &other.x;
        let y1y2 = &self.y * &other.y;
        let x1x2 = &self.x * &other.x;
        let dxxyy = Affine::curve_d() * &x1x2 * &y1y2;

        // x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
        let x = (&x1y2 + &y1x2) / (BaseField::one() + &dxxyy);
        // y3 = (y1*y2 - x1*x2) / (1 - d*x1*x2*y1*y2)
        let y = (&y1y2 - &x1x2) / (BaseField::one() - &dxxyy);

        Affine { x, y }
    }
}

impl<'a> Add<&'a Affine> for Affine {
    type Output = Affine;

    fn add(self, other: &'a Affine) -> Affine {
        &self + other
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl AddAssign<&Affine> for Affine {
    fn add_assign(&mut self, other: &Affine) {
        *self = &*self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl<'a, 'b> Sub<&'b Affine> for &'a Affine {
    type Output = Affine;

    fn sub(self, other: &'b Affine) -> Affine {
        self + &other.negate()
    }
}

impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl SubAssign<&Affine> for Affine {
    fn sub_assign(&mut self, other: &Affine) {
        *self = &*self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Neg for &Affine {
    type Output = Affine;

    fn neg(self) -> Affine {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<&Scalar> for &Affine {
    type Output = Affine;

    fn mul(self, scalar: &Scalar) -> Affine {
        <Affine as Group>::scalar_mul(self, scalar)
    }
}

impl Mul<&Scalar> for Affine {
    type Output = Self;

    fn mul(self, scalar: &Scalar) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<&Affine> for &Scalar {
    type Output = Affine;

    fn mul(self, point: &Affine) -> Affine {
        <Affine as Group>::scalar_mul(point, self)
    }
}

impl From<Affine> for Vec<u8> {
    fn from(point: Affine) -> Self {
        point.to_bytes().to_vec()
    }
}

impl TryFrom<Vec<u8>> for Affine {
    type Error = CurveError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Affine::from_bytes(&bytes)
    }
}
