//! Proof type, challenge hashing and verification.

use curve::{Group, POINT_SIZE, Point, SCALAR_SIZE, Scalar};
use serde::{Deserialize, Serialize};

use crate::constants::{CHALLENGE_PREFIX, PROOF_SIZE};
use crate::errors::{NizkError, Result};
use crate::transcript::HashSuite;

/// A non-interactive proof of knowledge of the secret behind a fingerprint.
///
/// The proof is a pair `(T, r)` where:
/// - `T = v * G` is the commitment to a fresh random nonce `v`
/// - `r = v - c * x` is the response, with `x` the message secret
///
/// # Structure
///
/// The proof satisfies the verification equation `c * X + r * G == T`
/// where `X` is the fingerprint point and `c = H(G || X || T || stamp)`.
/// On the wire it is `T || r`, exactly [`PROOF_SIZE`] bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proof {
    /// Encoding of the commitment point T.
    pub commitment: [u8; POINT_SIZE],
    /// Encoding of the response scalar r.
    pub response: [u8; SCALAR_SIZE],
}

impl Proof {
    /// Splits wire bytes into commitment and response without decoding either.
    ///
    /// Fails with [`NizkError::SizeMismatch`] unless `bytes` is exactly
    /// [`PROOF_SIZE`] long; no partial parse is attempted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PROOF_SIZE {
            return Err(NizkError::SizeMismatch {
                expected: PROOF_SIZE,
                actual: bytes.len(),
            });
        }
        let (t, r) = bytes.split_at(POINT_SIZE);
        let mut proof = Proof {
            commitment: [0u8; POINT_SIZE],
            response: [0u8; SCALAR_SIZE],
        };
        proof.commitment.copy_from_slice(t);
        proof.response.copy_from_slice(r);
        Ok(proof)
    }

    pub fn to_bytes(&self) -> [u8; PROOF_SIZE] {
        let mut out = [0u8; PROOF_SIZE];
        out[..POINT_SIZE].copy_from_slice(&self.commitment);
        out[POINT_SIZE..].copy_from_slice(&self.response);
        out
    }
}

impl TryFrom<&[u8]> for Proof {
    type Error = NizkError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Proof::from_bytes(bytes)
    }
}

impl From<Proof> for [u8; PROOF_SIZE] {
    fn from(proof: Proof) -> Self {
        proof.to_bytes()
    }
}

/// Computes the Fiat-Shamir challenge `c = H(G || X || T || stamp)`.
///
/// Fingerprint and commitment enter as the bytes that were published or
/// received, never re-encoded, so prover and verifier hash the same
/// transcript. Including the generator pins the proof to edwards25519.
pub(crate) fn hash_challenge(
    suite: HashSuite,
    fingerprint: &[u8],
    commitment: &[u8],
    stamp: &[u8],
) -> Result<Scalar> {
    let generator = Point::generator().to_bytes();
    suite.derive_scalar(
        CHALLENGE_PREFIX,
        &[&generator[..], fingerprint, commitment, stamp],
    )
}

/// Checks `proof` against a published fingerprint and stamp.
///
/// Returns `Ok(false)` when everything decodes but the equation does not
/// hold. Decoding problems are errors, checked in this order: proof length,
/// response scalar, fingerprint point, commitment point.
pub(crate) fn verify_proof(
    suite: HashSuite,
    fingerprint: &[u8],
    stamp: &[u8],
    proof: &[u8],
) -> Result<bool> {
    let proof = Proof::from_bytes(proof)?;

    let r = Scalar::from_canonical_bytes(&proof.response)
        .map_err(NizkError::InvalidScalarEncoding)?;
    let x = Point::from_bytes(fingerprint).map_err(NizkError::InvalidPointEncoding)?;

    let c = hash_challenge(suite, fingerprint, &proof.commitment, stamp)?;

    let t = Point::from_bytes(&proof.commitment).map_err(NizkError::InvalidPointEncoding)?;

    // c*X + r*G = c*x*G + (v - c*x)*G = v*G
    let expected = Point::double_scalar_mul_basepoint(&c, &x, &r);

    Ok(expected == t)
}
