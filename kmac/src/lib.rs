//! Keccak-based extendable-output functions following NIST SP 800-185.
//!
//! The layers are strictly stacked, each one a pure function over the layer
//! below: [`keccak_f1600`] → [`keccak512`] (sponge, rate 1088 / capacity 512)
//! → [`cshake256`] → [`kmac_xof256`].
//!
//! # Compatibility
//!
//! Three behaviours keep outputs bit-compatible with cryptograms and
//! signatures already produced by this toolkit, and differ from SP 800-185 on
//! narrow inputs:
//!
//! - the sponge appends no padding block when the input already fills a whole
//!   number of rate blocks;
//! - `cshake256` with empty function name and customization does not append
//!   the SHAKE suffix;
//! - `bytepad` appends a whole block of zeros when its input already ends on
//!   a block boundary.
//!
//! On every other input the published cSHAKE256 and KMACXOF256 samples are
//! reproduced exactly.

mod cshake;
pub mod encoding;
pub mod keccak;
mod kmac;
pub mod sponge;

pub use cshake::cshake256;
pub use encoding::{bytepad, encode_string, left_encode, right_encode};
pub use keccak::keccak_f1600;
pub use kmac::kmac_xof256;
pub use sponge::{keccak512, CAPACITY_BITS, RATE_BITS, RATE_BYTES};

#[cfg(test)]
mod tests {
    use super::*;

    // Known answers for the three divergent paths, fixed from this
    // implementation's own outputs.

    #[test]
    fn test_block_aligned_sponge_input() {
        let out = keccak512(&[0x33; 136], 256);
        assert_eq!(
            hex::encode(out),
            "b8332c9f49c85dd8e2dbc4a2a10ab68ed45a0dbd0f612755e2288501348921bb"
        );
    }

    #[test]
    fn test_block_aligned_cshake_input() {
        // 136-byte prefix block + 135 bytes + domain byte = two whole blocks.
        let out = cshake256(&[0x22; 135], 256, b"", b"S");
        assert_eq!(
            hex::encode(out),
            "075a53596e6395b334de2d506596d08ee9c3bbf44347ff20420b9f9d3cf86409"
        );
    }

    #[test]
    fn test_block_aligned_kmac_key() {
        // left_encode(136) + left_encode(1048) + 131 key bytes = 136 bytes.
        let out = kmac_xof256(&[0x11; 131], b"", 256, b"");
        assert_eq!(
            hex::encode(out),
            "5de45e8044f5bb38e7da55b57a59a2ae822dc127ceb11657360d963f818e7dad"
        );
    }

    #[test]
    fn test_empty_key_hash() {
        let out = kmac_xof256(b"", b"", 512, b"D");
        assert_eq!(
            hex::encode(out),
            "d714347493b4cf23af8bea77bf811ee75a99c4087b3329966a0952f57d087aba\
             d4a31831f05a815db330bee0e61be30dc78d4bdcc57f0ce5515a98a53e73505d"
        );
    }
}
