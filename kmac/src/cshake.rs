//! cSHAKE256 over the fixed-rate sponge.

use crate::encoding::{bytepad, encode_string};
use crate::sponge::{keccak512, RATE_BYTES};

const CSHAKE_DOMAIN: u8 = 0x04;

/// cSHAKE256 of `x` with function name `function_name` and customization
/// `customization`, producing `output_bits / 8` bytes.
///
/// With both strings empty the input goes to the sponge as is: no SHAKE
/// suffix is appended, so that branch is not SHAKE256.
pub fn cshake256(
    x: &[u8],
    output_bits: usize,
    function_name: &[u8],
    customization: &[u8],
) -> Vec<u8> {
    if function_name.is_empty() && customization.is_empty() {
        return keccak512(x, output_bits);
    }

    let mut prefix = encode_string(function_name);
    prefix.extend_from_slice(&encode_string(customization));

    let mut input = bytepad(&prefix, RATE_BYTES);
    input.reserve(x.len() + 1);
    input.extend_from_slice(x);
    input.push(CSHAKE_DOMAIN);

    keccak512(&input, output_bits)
}
