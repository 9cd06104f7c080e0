use core::ops::{Add, Neg, Sub};

use crate::EncodingError;

pub trait Group:
    Sized + Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self>
{
    type Scalar: Copy;
    /// Fixed-width canonical encoding of a group element.
    type Encoding: AsRef<[u8]> + Copy;

    fn identity() -> Self;
    fn generator() -> Self;

    #[inline]
    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Constant-time `scalar * G`.
    fn mul_generator(scalar: &Self::Scalar) -> Self;

    /// Constant-time `scalar * self`.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self;

    /// Computes `a * point + b * G`.
    ///
    /// Runs in variable time; only call it with public operands.
    fn double_scalar_mul_basepoint(a: &Self::Scalar, point: &Self, b: &Self::Scalar) -> Self;

    fn to_bytes(&self) -> Self::Encoding;

    /// Decodes untrusted bytes, rejecting anything that is not a group element.
    fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError>;
}
