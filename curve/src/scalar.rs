//! Scalar field of edwards25519, integers modulo
//! ℓ = 2^252 + 27742317777372353535851937790883648493.
//!
//! Every `Scalar` holds the canonical reduced representative. Untrusted bytes
//! enter either through [`Scalar::from_canonical_bytes`], which rejects
//! anything that is not already reduced, or through the clamping and wide
//! reductions used for hash outputs and nonces.

use core::ops::{Add, Mul, Neg, Sub};

use curve25519_dalek::scalar::{Scalar as DalekScalar, clamp_integer};
use zeroize::Zeroize;

use crate::EncodingError;

/// Size of an encoded scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scalar(pub(crate) DalekScalar);

impl Scalar {
    pub const ZERO: Self = Scalar(DalekScalar::ZERO);
    pub const ONE: Self = Scalar(DalekScalar::ONE);

    /// Interprets 32 bytes as a little-endian integer, applies the ed25519
    /// clamp and reduces modulo ℓ.
    ///
    /// Fails only when `bytes` is not exactly 32 bytes long.
    pub fn from_bytes_with_clamping(bytes: &[u8]) -> Result<Self, EncodingError> {
        let raw = fixed_width(bytes)?;
        Ok(Scalar(DalekScalar::from_bytes_mod_order(clamp_integer(raw))))
    }

    /// Decodes a scalar that must already be reduced modulo ℓ.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        let raw = fixed_width(bytes)?;
        Option::<DalekScalar>::from(DalekScalar::from_canonical_bytes(raw))
            .map(Scalar)
            .ok_or(EncodingError::NonCanonicalScalar)
    }

    /// Reduces a 512-bit little-endian integer modulo ℓ. The result is
    /// statistically close to uniform when the input is.
    #[inline]
    pub fn from_uniform_bytes(bytes: &[u8; 64]) -> Self {
        Scalar(DalekScalar::from_bytes_mod_order_wide(bytes))
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; SCALAR_SIZE] {
        self.0.to_bytes()
    }

    /// Computes `a * b + c`.
    #[inline]
    pub fn mul_add(a: &Self, b: &Self, c: &Self) -> Self {
        Scalar(a.0 * b.0 + c.0)
    }
}

fn fixed_width(bytes: &[u8]) -> Result<[u8; SCALAR_SIZE], EncodingError> {
    bytes
        .try_into()
        .map_err(|_| EncodingError::InvalidLength {
            expected: SCALAR_SIZE,
            actual: bytes.len(),
        })
}

impl From<u64> for Scalar {
    #[inline]
    fn from(val: u64) -> Self {
        Scalar(DalekScalar::from(val))
    }
}

impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Scalar(self.0 * rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Scalar(-self.0)
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
