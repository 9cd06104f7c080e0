//! The proof suite: one hash choice over edwards25519.

use core::str::FromStr;

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::constants::{FINGERPRINT_SIZE, PROOF_SIZE};
use crate::errors::{NizkError, Result};
use crate::keys::{Fingerprint, MessageKey};
use crate::proof::{Proof, verify_proof};
use crate::transcript::HashSuite;

/// Proves and verifies knowledge of messages under a fixed hash suite.
///
/// A `Nizk` holds no state besides its suite choice; every call is a pure
/// function of its arguments plus, for proving, fresh randomness. It is
/// `Copy` and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use nizk::Nizk;
///
/// let alice = Nizk::ed25519_sha3();
/// let message = b"Arbitrary message which knowledge you want to prove.";
/// let stamp = b"public keys, salts, session identifiers";
/// let (proof, fingerprint) = alice.prove(message, stamp).expect("prove");
///
/// // Bob knows the same message and agreed on the stamp out of band.
/// let bob = Nizk::ed25519_sha3();
/// assert_eq!(bob.fingerprint(message).expect("fingerprint"), fingerprint);
/// assert!(bob.verify(fingerprint.as_bytes(), stamp, &proof.to_bytes()).expect("verify"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nizk {
    suite: HashSuite,
}

impl Nizk {
    pub const fn new(suite: HashSuite) -> Self {
        Self { suite }
    }

    pub const fn ed25519_sha256() -> Self {
        Self::new(HashSuite::Sha256)
    }

    pub const fn ed25519_sha3() -> Self {
        Self::new(HashSuite::Sha3_256)
    }

    pub const fn suite(&self) -> HashSuite {
        self.suite
    }

    /// Derives the public fingerprint of `message`. Deterministic.
    #[instrument(level = "trace", skip_all, fields(suite = %self.suite, message_len = message.len()))]
    pub fn fingerprint(&self, message: &[u8]) -> Result<Fingerprint> {
        MessageKey::derive(self.suite, message).map(|key| key.fingerprint())
    }

    /// Proves knowledge of `message` bound to `stamp`, drawing the nonce
    /// from the operating system's CSPRNG.
    ///
    /// Returns the proof together with the message fingerprint.
    pub fn prove(&self, message: &[u8], stamp: &[u8]) -> Result<(Proof, Fingerprint)> {
        self.prove_with_rng(&mut OsRng, message, stamp)
    }

    /// Same as [`Nizk::prove`] with an explicit entropy source.
    ///
    /// `rng` must be cryptographically secure. A seeded generator is only
    /// acceptable in tests: replaying its stream under a different stamp
    /// reuses the nonce and leaks the message secret.
    #[instrument(
        level = "trace",
        skip_all,
        fields(suite = %self.suite, message_len = message.len(), stamp_len = stamp.len())
    )]
    pub fn prove_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &[u8],
        stamp: &[u8],
    ) -> Result<(Proof, Fingerprint)> {
        let key = MessageKey::derive(self.suite, message)?;
        let proof = key.prove(rng, stamp)?;
        Ok((proof, key.fingerprint()))
    }

    /// Verifies `proof` against a published `fingerprint` and `stamp`.
    ///
    /// Returns `Ok(false)` when the proof is well formed but invalid, and an
    /// error when `proof` has the wrong size or any component fails to decode.
    #[instrument(
        level = "trace",
        skip_all,
        fields(suite = %self.suite, stamp_len = stamp.len(), proof_len = proof.len())
    )]
    pub fn verify(&self, fingerprint: &[u8], stamp: &[u8], proof: &[u8]) -> Result<bool> {
        verify_proof(self.suite, fingerprint, stamp, proof)
    }

    pub const fn proof_size(&self) -> usize {
        PROOF_SIZE
    }

    pub const fn fingerprint_size(&self) -> usize {
        FINGERPRINT_SIZE
    }
}

impl From<HashSuite> for Nizk {
    fn from(suite: HashSuite) -> Self {
        Self::new(suite)
    }
}

impl FromStr for Nizk {
    type Err = NizkError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<HashSuite>().map(Self::new)
    }
}
