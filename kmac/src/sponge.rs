//! Single-phase Keccak sponge with a fixed 1088-bit rate.
//!
//! Every call absorbs the whole input and then squeezes the whole output;
//! there is no incremental state kept between calls.

use crate::keccak::{keccak_f1600, LANES};

/// Sponge rate in bits.
pub const RATE_BITS: usize = 1088;

/// Sponge capacity in bits.
pub const CAPACITY_BITS: usize = 512;

/// Sponge rate in bytes.
pub const RATE_BYTES: usize = RATE_BITS / 8;

/// Number of state lanes covered by the rate.
pub const RATE_LANES: usize = RATE_BITS / 64;

const PAD_FINAL_BYTE: u8 = 0x80;

/// Pads `input` up to the next multiple of the rate.
///
/// The last appended byte is `0x80`. Input that already fills a whole number
/// of blocks is returned unchanged; callers always end their input with a
/// domain byte before reaching the sponge.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let remainder = input.len() % RATE_BYTES;
    if remainder == 0 {
        return input.to_vec();
    }

    let mut padded = Vec::with_capacity(input.len() + RATE_BYTES - remainder);
    padded.extend_from_slice(input);
    padded.resize(input.len() + RATE_BYTES - remainder, 0);
    if let Some(last) = padded.last_mut() {
        *last = PAD_FINAL_BYTE;
    }
    padded
}

/// Keccak[c = 512] over `input`, producing `output_bits / 8` bytes.
pub fn keccak512(input: &[u8], output_bits: usize) -> Vec<u8> {
    let state = absorb(&pad(input));
    squeeze(state, output_bits / 8)
}

fn absorb(padded: &[u8]) -> [u64; LANES] {
    debug_assert_eq!(padded.len() % RATE_BYTES, 0);

    let mut state = [0u64; LANES];
    for block in padded.chunks_exact(RATE_BYTES) {
        for (lane, word) in state.iter_mut().zip(block.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(word);
            *lane ^= u64::from_le_bytes(bytes);
        }
        keccak_f1600(&mut state);
    }
    state
}

fn squeeze(mut state: [u64; LANES], output_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(output_len + RATE_BYTES);
    loop {
        for lane in &state[..RATE_LANES] {
            out.extend_from_slice(&lane.to_le_bytes());
        }
        keccak_f1600(&mut state);
        if out.len() >= output_len {
            break;
        }
    }
    out.truncate(output_len);
    out
}
