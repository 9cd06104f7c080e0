//! Hash suites and the hash-to-scalar step of the Fiat-Shamir transform.

use core::fmt;
use core::str::FromStr;

use curve::Scalar;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Sha3_256;

use crate::errors::{NizkError, Result};

/// Hash function backing a proof suite.
///
/// Fingerprints and proofs from different suites are never comparable: the
/// same message yields unrelated fingerprints under each suite.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashSuite {
    /// SHA-256.
    #[serde(rename = "ed25519_sha256", alias = "sha256")]
    Sha256,
    /// SHA3-256, the Keccak sponge in fixed-digest mode.
    #[serde(rename = "ed25519_sha3", alias = "sha3", alias = "sha3-256")]
    Sha3_256,
}

impl HashSuite {
    /// Every supported suite.
    pub const ALL: [HashSuite; 2] = [HashSuite::Sha256, HashSuite::Sha3_256];

    /// Canonical suite name.
    pub const fn name(&self) -> &'static str {
        match self {
            HashSuite::Sha256 => "ed25519_sha256",
            HashSuite::Sha3_256 => "ed25519_sha3",
        }
    }

    /// Computes `hash(prefix || parts[0] || parts[1] || ...)` and reduces the
    /// 32-byte digest into a scalar with the ed25519 clamp.
    ///
    /// Feeding the parts one by one hashes exactly the same bytes as hashing
    /// their concatenation.
    pub fn derive_scalar(&self, prefix: &[u8], parts: &[&[u8]]) -> Result<Scalar> {
        match self {
            HashSuite::Sha256 => derive_scalar_with::<Sha256>(prefix, parts),
            HashSuite::Sha3_256 => derive_scalar_with::<Sha3_256>(prefix, parts),
        }
    }
}

fn derive_scalar_with<D: Digest>(prefix: &[u8], parts: &[&[u8]]) -> Result<Scalar> {
    let mut hasher = D::new();
    hasher.update(prefix);
    for part in parts {
        hasher.update(part);
    }
    Scalar::from_bytes_with_clamping(&hasher.finalize()).map_err(NizkError::ScalarDecodeFailure)
}

impl fmt::Display for HashSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashSuite {
    type Err = NizkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ed25519_sha256" | "sha256" => Ok(HashSuite::Sha256),
            "ed25519_sha3" | "sha3" | "sha3-256" => Ok(HashSuite::Sha3_256),
            _ => Err(NizkError::UnknownSuite(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_hash_like_concatenation() {
        for suite in HashSuite::ALL {
            let split = suite.derive_scalar(b"pre", &[&b"ab"[..], &b""[..], &b"cd"[..]]).unwrap();
            let joined = suite.derive_scalar(b"", &[&b"preabcd"[..]]).unwrap();
            assert_eq!(split, joined);
        }
    }

    #[test]
    fn test_suites_disagree() {
        let a = HashSuite::Sha256.derive_scalar(b"", &[&b"data"[..]]).unwrap();
        let b = HashSuite::Sha3_256.derive_scalar(b"", &[&b"data"[..]]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_matches_clamped_digest() {
        let digest = Sha256::digest(b"hello");
        let expected = Scalar::from_bytes_with_clamping(&digest).unwrap();
        let s = HashSuite::Sha256.derive_scalar(b"he", &[&b"llo"[..]]).unwrap();
        assert_eq!(s, expected);
    }

    #[test]
    fn test_parse_names() {
        for suite in HashSuite::ALL {
            assert_eq!(suite.name().parse::<HashSuite>(), Ok(suite));
            assert_eq!(suite.to_string(), suite.name());
        }
        assert_eq!("SHA3-256".parse::<HashSuite>(), Ok(HashSuite::Sha3_256));
        assert_eq!(" sha256 ".parse::<HashSuite>(), Ok(HashSuite::Sha256));
        assert_eq!(
            "blake3".parse::<HashSuite>(),
            Err(NizkError::UnknownSuite("blake3".to_owned()))
        );
    }
}
