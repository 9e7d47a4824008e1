//! Keccak-f[1600] permutation.
//!
//! The state is 25 lanes of 64 bits indexed as `x + 5 * y`. Each of the 24
//! rounds applies theta, rho and pi, chi and iota in that order.

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the permutation state.
pub const LANES: usize = 25;

/// Iota round constants, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, in the order lanes are visited by [`PI_LANES`].
pub const ROTATION_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi destination lanes. Lane 0 never moves.
pub const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Applies the full 24-round permutation to `state` in place.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    for round_constant in ROUND_CONSTANTS {
        theta(state);
        rho_pi(state);
        chi(state);
        // iota
        state[0] ^= round_constant;
    }
}

#[inline]
fn theta(state: &mut [u64; LANES]) {
    let mut parity = [0u64; 5];
    for (x, column) in parity.iter_mut().enumerate() {
        *column = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }

    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }
}

#[inline]
fn rho_pi(state: &mut [u64; LANES]) {
    let mut carried = state[1];
    for (&lane, &offset) in PI_LANES.iter().zip(ROTATION_OFFSETS.iter()) {
        let next = state[lane];
        state[lane] = carried.rotate_left(offset);
        carried = next;
    }
}

#[inline]
fn chi(state: &mut [u64; LANES]) {
    for y in 0..5 {
        let mut row = [0u64; 5];
        row.copy_from_slice(&state[5 * y..5 * y + 5]);
        for x in 0..5 {
            state[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}
