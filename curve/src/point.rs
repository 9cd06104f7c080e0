//! Points of the edwards25519 group.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::Identity;

use crate::{EncodingError, Group, Scalar, double_scalar_mul_basepoint};

/// Size of a compressed point in bytes.
pub const POINT_SIZE: usize = 32;

/// An element of the edwards25519 group.
///
/// Encoded as the 32-byte compressed Edwards y-coordinate with the sign of x
/// in the top bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point(pub(crate) EdwardsPoint);

impl Point {
    pub const GENERATOR: Self = Point(ED25519_BASEPOINT_POINT);

    #[inline]
    pub fn double(&self) -> Self {
        Point(self.0 + self.0)
    }
}

impl Group for Point {
    type Scalar = Scalar;
    type Encoding = [u8; POINT_SIZE];

    #[inline]
    fn identity() -> Self {
        Point(EdwardsPoint::identity())
    }

    #[inline]
    fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    fn mul_generator(scalar: &Scalar) -> Self {
        Point(EdwardsPoint::mul_base(&scalar.0))
    }

    #[inline]
    fn scalar_mul(&self, scalar: &Scalar) -> Self {
        Point(&self.0 * &scalar.0)
    }

    #[inline]
    fn double_scalar_mul_basepoint(a: &Scalar, point: &Self, b: &Scalar) -> Self {
        double_scalar_mul_basepoint(a, point, b)
    }

    #[inline]
    fn to_bytes(&self) -> [u8; POINT_SIZE] {
        self.0.compress().to_bytes()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        let compressed =
            CompressedEdwardsY::from_slice(bytes).map_err(|_| EncodingError::InvalidLength {
                expected: POINT_SIZE,
                actual: bytes.len(),
            })?;
        compressed
            .decompress()
            .map(Point)
            .ok_or(EncodingError::InvalidPoint)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point(self.0 + rhs.0)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point(self.0 - rhs.0)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point(-self.0)
    }
}
