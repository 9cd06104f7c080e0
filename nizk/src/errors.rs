//! Error types for proving and verification.

use curve::EncodingError;
use thiserror::Error;

/// Result type for proof operations.
pub type Result<T> = core::result::Result<T, NizkError>;

/// Errors that can occur while proving or while decoding proof material.
///
/// A proof that decodes cleanly but fails the algebraic check is not an
/// error: `verify` returns `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NizkError {
    /// The entropy source could not supply nonce bytes. Nothing is retried.
    #[error("randomness source failed: {0}")]
    RandomnessFailure(String),

    /// The proof does not have the fixed proof length.
    #[error("wrong size of proof: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The response bytes are not a canonical scalar.
    #[error("can't read response scalar: {0}")]
    InvalidScalarEncoding(EncodingError),

    /// The fingerprint or the commitment does not decode to a group element.
    #[error("can't read point: {0}")]
    InvalidPointEncoding(EncodingError),

    /// A digest was rejected by the hash-to-scalar reduction.
    ///
    /// Unreachable with the built-in 32-byte hashes.
    #[error("can't reduce digest to a scalar: {0}")]
    ScalarDecodeFailure(EncodingError),

    /// No hash suite is registered under this name.
    #[error("unknown suite `{0}`")]
    UnknownSuite(String),
}
