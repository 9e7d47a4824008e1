//! Fixed-width signed big-endian integer codec.
//!
//! A value is written as its minimal two's-complement bytes, right-justified
//! in a slot of `width` bytes. The unused leading bytes are filled with
//! `0x00` for non-negative values and `0xFF` for negative ones, so decoding
//! the whole slot as a signed integer returns the original value.

use num_bigint::{BigInt, Sign};

use crate::CurveError;

/// Encodes `value` into exactly `width` bytes.
pub fn encode_fixed(value: &BigInt, width: usize) -> Result<Vec<u8>, CurveError> {
    let digits = value.to_signed_bytes_be();
    if digits.len() > width {
        return Err(CurveError::Overflow {
            width,
            needed: digits.len(),
        });
    }

    let fill = if value.sign() == Sign::Minus { 0xFF } else { 0x00 };
    let mut out = vec![fill; width];
    out[width - digits.len()..].copy_from_slice(&digits);
    Ok(out)
}

/// Reads `bytes` as a signed big-endian integer.
pub fn decode_fixed(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_be(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_zero_fill() {
        let out = encode_fixed(&BigInt::from(0x1234), 5).expect("fits");
        assert_eq!(out, vec![0, 0, 0, 0x12, 0x34]);
        assert_eq!(decode_fixed(&out), BigInt::from(0x1234));
    }

    #[test]
    fn test_negative_sign_extension() {
        let out = encode_fixed(&BigInt::from(-2), 4).expect("fits");
        assert_eq!(out, vec![0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(decode_fixed(&out), BigInt::from(-2));
    }

    #[test]
    fn test_high_bit_keeps_sign_byte() {
        // 0x80 needs a leading zero to stay positive.
        let out = encode_fixed(&BigInt::from(0x80), 2).expect("fits");
        assert_eq!(out, vec![0x00, 0x80]);
        assert_eq!(
            encode_fixed(&BigInt::from(0x80), 1),
            Err(CurveError::Overflow { width: 1, needed: 2 })
        );
    }

    #[test]
    fn test_zero() {
        assert_eq!(encode_fixed(&BigInt::from(0), 3).expect("fits"), vec![0, 0, 0]);
        assert_eq!(decode_fixed(&[0, 0, 0]), BigInt::from(0));
    }

    #[test]
    fn test_full_width_values() {
        let max = (BigInt::from(1) << 519u32) - 1;
        let out = encode_fixed(&max, 65).expect("fits");
        assert_eq!(out[0], 0x7F);
        assert_eq!(decode_fixed(&out), max);

        let min = -(BigInt::from(1) << 519u32);
        let out = encode_fixed(&min, 65).expect("fits");
        assert_eq!(out[0], 0x80);
        assert_eq!(decode_fixed(&out), min);
    }
}
