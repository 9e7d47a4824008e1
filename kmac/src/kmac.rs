//! KMACXOF256, the keyed XOF every higher-level operation is built from.

use crate::cshake::cshake256;
use crate::encoding::{bytepad, encode_string, right_encode};
use crate::sponge::RATE_BYTES;

const KMAC_NAME: &[u8] = b"KMAC";

/// KMACXOF256 of `x` under `key` with customization `customization`.
///
/// `newX = bytepad(encode_string(K), 136) || X || right_encode(0)`, then
/// `cSHAKE256(newX, L, "KMAC", S)`. Returns `output_bits / 8` bytes.
pub fn kmac_xof256(key: &[u8], x: &[u8], output_bits: usize, customization: &[u8]) -> Vec<u8> {
    let mut input = bytepad(&encode_string(key), RATE_BYTES);
    input.extend_from_slice(x);
    input.extend_from_slice(&right_encode(0));

    cshake256(&input, output_bits, KMAC_NAME, customization)
}
