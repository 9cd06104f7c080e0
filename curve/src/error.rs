use thiserror::Error;

/// Errors raised when untrusted bytes do not decode to a group or field element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The input does not have the fixed width of the encoding.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The scalar bytes are not the reduced representative modulo the group order.
    #[error("scalar encoding is not canonical")]
    NonCanonicalScalar,

    /// The point bytes do not decompress to a curve point.
    #[error("bytes do not encode a curve point")]
    InvalidPoint,
}
