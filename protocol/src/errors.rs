//! Error types for the protocol layer.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur during key handling, encryption and signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A curve point or fixed-width integer could not be decoded or encoded.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The recomputed tag did not match the received one.
    ///
    /// No plaintext is released when this is returned.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    /// A serialized value is shorter than its fixed structural minimum.
    #[error("{what} needs at least {minimum} bytes, got {actual}")]
    Truncated {
        what: &'static str,
        minimum: usize,
        actual: usize,
    },

    /// A session operation needed a key pair before one was generated.
    #[error("no active key pair: generate one first")]
    NoActiveKeyPair,
}
