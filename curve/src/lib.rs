//! Prime-order group over edwards25519.
//!
//! This crate wraps `curve25519-dalek` behind the small surface a Schnorr-style
//! proof needs: a fixed generator, canonical 32-byte point and scalar
//! encodings, clamped hash-to-scalar reduction, and the fixed-base and
//! double-base scalar multiplications.

mod error;
mod group;
mod msm;
mod point;
mod random;
mod scalar;

pub use error::EncodingError;
pub use group::Group;
pub use msm::double_scalar_mul_basepoint;
pub use point::{POINT_SIZE, Point};
pub use random::RandomScalar;
pub use scalar::{SCALAR_SIZE, Scalar};
