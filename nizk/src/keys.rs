//! Message secrets and the public fingerprints derived from them.

use core::fmt;

use curve::{EncodingError, Group, Point, RandomScalar, Scalar};
use rand::TryCryptoRng;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::constants::{FINGERPRINT_SIZE, MAGIC_PREFIX};
use crate::errors::{NizkError, Result};
use crate::proof::{Proof, hash_challenge, verify_proof};
use crate::transcript::HashSuite;

/// The secret scalar and public point deterministically derived from a message.
///
/// `x = H(MAGIC_PREFIX || message)` reduced with clamping and `X = x * G`.
/// Anyone who knows the message can rebuild the same key, so the key is
/// only as secret as the message itself. The scalar is wiped on drop.
///
/// # Example
///
/// ```
/// use nizk::{HashSuite, MessageKey};
///
/// let key = MessageKey::derive(HashSuite::Sha3_256, b"a shared secret").expect("derive");
/// let proof = key.prove(&mut rand::rng(), b"session-42").expect("prove");
/// let valid = key
///     .fingerprint()
///     .verify(HashSuite::Sha3_256, b"session-42", &proof.to_bytes())
///     .expect("well-formed proof");
/// assert!(valid);
/// ```
pub struct MessageKey {
    suite: HashSuite,
    secret: Scalar,
    public: Point,
}

/// Public identity of a message: the encoding of `X = x * G`.
///
/// Safe to publish; recovering the message or `x` from it is as hard as
/// computing a discrete logarithm.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl MessageKey {
    /// Hashes `message` under `suite` into its secret scalar and public point.
    ///
    /// Deterministic: the same suite and message always give the same key.
    /// Fails only with [`NizkError::ScalarDecodeFailure`], which the
    /// built-in 32-byte suites never trigger.
    pub fn derive(suite: HashSuite, message: &[u8]) -> Result<Self> {
        let secret = suite.derive_scalar(MAGIC_PREFIX, &[message])?;
        let public = Point::mul_generator(&secret);
        Ok(Self {
            suite,
            secret,
            public,
        })
    }

    pub fn suite(&self) -> HashSuite {
        self.suite
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(self.public.to_bytes())
    }

    /// Proves knowledge of this key's secret, bound to `stamp`.
    ///
    /// The proof is computed as follows:
    /// 1. Sample a fresh uniform nonce `v` from `rng`
    /// 2. Compute the commitment `T = v * G`
    /// 3. Compute the challenge `c = H(G || X || T || stamp)`
    /// 4. Compute the response `r = v - c * x`
    /// 5. Return `(T, r)`
    ///
    /// # Security
    ///
    /// `v` must never repeat across two different challenges: two responses
    /// under one nonce reveal `x` by linear algebra. Pass a CSPRNG only.
    ///
    /// # Errors
    ///
    /// - [`NizkError::RandomnessFailure`] if `rng` cannot supply bytes
    /// - [`NizkError::ScalarDecodeFailure`] if the challenge digest is rejected
    pub fn prove<R: TryCryptoRng + ?Sized>(&self, rng: &mut R, stamp: &[u8]) -> Result<Proof> {
        let nonce = Zeroizing::new(
            Scalar::try_random(rng)
                .map_err(|err| NizkError::RandomnessFailure(err.to_string()))?,
        );
        let commitment = Point::mul_generator(&*nonce).to_bytes();

        let fingerprint = self.fingerprint();
        let c = hash_challenge(self.suite, fingerprint.as_bytes(), &commitment, stamp)?;
        let response = Scalar::mul_add(&-c, &self.secret, &*nonce);

        Ok(Proof {
            commitment,
            response: response.to_bytes(),
        })
    }
}

impl Drop for MessageKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl fmt::Debug for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageKey")
            .field("suite", &self.suite)
            .field("fingerprint", &self.fingerprint())
            .finish_non_exhaustive()
    }
}

impl Fingerprint {
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }

    pub const fn to_bytes(&self) -> [u8; FINGERPRINT_SIZE] {
        self.0
    }

    /// Verifies `proof` for this fingerprint and `stamp` under `suite`.
    ///
    /// Returns `Ok(true)` for a valid proof, `Ok(false)` for a well-formed
    /// proof that fails the check, and an error when the proof or the
    /// fingerprint cannot be decoded.
    pub fn verify(&self, suite: HashSuite, stamp: &[u8], proof: &[u8]) -> Result<bool> {
        verify_proof(suite, &self.0, stamp, proof)
    }
}

impl From<[u8; FINGERPRINT_SIZE]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        Fingerprint(bytes)
    }
}

/// Checks the length only; point validity is checked during verification.
impl TryFrom<&[u8]> for Fingerprint {
    type Error = NizkError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let fixed: [u8; FINGERPRINT_SIZE] = bytes.try_into().map_err(|_| {
            NizkError::InvalidPointEncoding(EncodingError::InvalidLength {
                expected: FINGERPRINT_SIZE,
                actual: bytes.len(),
            })
        })?;
        Ok(Fingerprint(fixed))
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
