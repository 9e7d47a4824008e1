//! Error types for curve points and the fixed-width integer codec.

use thiserror::Error;

/// Errors raised while building or decoding curve values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The coordinates do not describe a point on the curve.
    ///
    /// Raised when decompression finds no square root for the requested
    /// x-coordinate and parity, when checked construction is handed
    /// coordinates off the curve, and when decoded coordinates are not
    /// canonical residues.
    #[error("coordinates do not describe a point on the curve")]
    InvalidPoint,

    /// An encoded value has the wrong number of bytes.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// An integer does not fit in its fixed-width slot.
    #[error("integer needs {needed} bytes but the slot holds {width}")]
    Overflow { width: usize, needed: usize },
}
