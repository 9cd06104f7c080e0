//! Sizes and fixed transcript prefixes of the proof system.

use curve::{POINT_SIZE, SCALAR_SIZE};

/// Size of a fingerprint in bytes.
///
/// A fingerprint is one compressed edwards25519 point.
pub const FINGERPRINT_SIZE: usize = POINT_SIZE;

/// Size of a serialized proof in bytes.
///
/// A proof consists of:
/// - The commitment point T (32 bytes)
/// - The response scalar r (32 bytes)
/// Total: 64 bytes, no length prefix and no version tag.
pub const PROOF_SIZE: usize = POINT_SIZE + SCALAR_SIZE;

/// Domain-separation prefix hashed in front of a message when deriving its
/// secret scalar.
///
/// Changing a single byte changes every fingerprint, so the value is frozen.
pub(crate) const MAGIC_PREFIX: &[u8] = b"Fiat-Shamir NIZK proof made by https://github.com/eliastor?d3eac842bf90905fc958c42422132e984676521f EOL";

/// The challenge transcript carries no prefix; the generator encoding leads it.
pub(crate) const CHALLENGE_PREFIX: &[u8] = b"";
