//! NIST SP 800-185 string and integer encodings.
//!
//! Integers are written as their minimal big-endian digit bytes with a count
//! byte in front (`left_encode`) or behind (`right_encode`). Zero has the
//! single digit `0x00`, so it encodes as `[1, 0]` and `[0, 1]`.

/// Minimal big-endian digits of `digits`, keeping one byte for zero.
fn significant(digits: &[u8]) -> &[u8] {
    let first = digits
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(digits.len().saturating_sub(1));
    match digits.get(first..) {
        Some(rest) if !rest.is_empty() => rest,
        _ => &[0],
    }
}

fn digit_count(digits: &[u8]) -> u8 {
    assert!(
        digits.len() <= u8::MAX as usize,
        "integer needs {} digit bytes, at most 255 are encodable",
        digits.len()
    );
    digits.len() as u8
}

/// `left_encode` of an arbitrary big-endian integer.
///
/// # Panics
///
/// Panics if the integer has more than 255 significant bytes.
pub fn left_encode_digits(digits: &[u8]) -> Vec<u8> {
    let digits = significant(digits);
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.push(digit_count(digits));
    out.extend_from_slice(digits);
    out
}

/// `right_encode` of an arbitrary big-endian integer.
///
/// # Panics
///
/// Panics if the integer has more than 255 significant bytes.
pub fn right_encode_digits(digits: &[u8]) -> Vec<u8> {
    let digits = significant(digits);
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.extend_from_slice(digits);
    out.push(digit_count(digits));
    out
}

pub fn left_encode(value: u64) -> Vec<u8> {
    left_encode_digits(&value.to_be_bytes())
}

pub fn right_encode(value: u64) -> Vec<u8> {
    right_encode_digits(&value.to_be_bytes())
}

/// Parses a `left_encode` prefix of `bytes`.
///
/// Returns the big-endian digits and the number of bytes consumed.
pub fn left_decode(bytes: &[u8]) -> Option<(Vec<u8>, usize)> {
    let (&count, rest) = bytes.split_first()?;
    let count = count as usize;
    if count == 0 {
        return None;
    }
    let digits = rest.get(..count)?;
    Some((digits.to_vec(), count + 1))
}

/// Parses a `right_encode` suffix of `bytes`.
///
/// Returns the big-endian digits and the number of trailing bytes consumed.
pub fn right_decode(bytes: &[u8]) -> Option<(Vec<u8>, usize)> {
    let (&count, rest) = bytes.split_last()?;
    let count = count as usize;
    if count == 0 || count > rest.len() {
        return None;
    }
    let digits = &rest[rest.len() - count..];
    Some((digits.to_vec(), count + 1))
}

/// `left_encode(bit length of s) || s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let bits = (s.len() as u128) * 8;
    let mut out = left_encode_digits(&bits.to_be_bytes());
    out.extend_from_slice(s);
    out
}

/// `left_encode(w) || x`, zero-filled to a multiple of `w` bytes.
///
/// The fill is always `w - (len mod w)` bytes, so input landing exactly on a
/// block boundary is followed by one whole block of zeros.
pub fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    assert!(w > 0, "bytepad width must be positive");

    let mut out = left_encode(w as u64);
    out.extend_from_slice(x);
    let fill = w - out.len() % w;
    out.resize(out.len() + fill, 0);
    out
}
