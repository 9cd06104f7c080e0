//! Non-interactive zero-knowledge proof of knowledge of a message.
//!
//! A prover holding a message publishes two artifacts:
//! - a deterministic *fingerprint*, the encoding of `X = x * G` where `x` is
//!   a hash of the message, and
//! - a Fiat-Shamir Schnorr proof that it knows `x`, bound to a caller-chosen
//!   *stamp* (public keys, salts, session identifiers).
//!
//! Anyone who independently knows the same message computes the same
//! fingerprint and checks the proof, without the message ever being sent.
//!
//! # Protocol
//!
//! Over the edwards25519 group with generator `G` and hash `H`:
//!
//! - `x = clamp(H(MAGIC || message))`, `X = x * G`
//! - prove: `T = v * G` for a fresh random `v`, `c = clamp(H(G || X || T || stamp))`,
//!   `r = v - c * x`; the proof is `T || r` (64 bytes)
//! - verify: accept iff `c * X + r * G == T`
//!
//! Two suites are offered, [`HashSuite::Sha256`] and [`HashSuite::Sha3_256`].
//! Their fingerprints are deliberately incomparable.
//!
//! # Example
//!
//! ```
//! use nizk::Nizk;
//!
//! let zk = Nizk::ed25519_sha256();
//! let (proof, fingerprint) = zk.prove(b"message", b"stamp").expect("prove");
//! assert_eq!(fingerprint.as_bytes().len(), zk.fingerprint_size());
//! assert_eq!(proof.to_bytes().len(), zk.proof_size());
//!
//! assert!(zk.verify(fingerprint.as_bytes(), b"stamp", &proof.to_bytes()).unwrap());
//! assert!(!zk.verify(fingerprint.as_bytes(), b"other stamp", &proof.to_bytes()).unwrap());
//! ```
//!
//! # Security Considerations
//!
//! - The fingerprint is only as secret as the message: a low-entropy message
//!   can be brute-forced from its fingerprint
//! - Every proof must use a fresh nonce from a CSPRNG; see [`MessageKey::prove`]
//! - The stamp is a binder, not a replay counter; freshness is the caller's job
//! - No logging happens inside the library; public operations only open
//!   `tracing` spans carrying the suite name and input lengths

mod constants;
mod errors;
mod keys;
mod proof;
mod suite;
mod transcript;


pub use constants::{FINGERPRINT_SIZE, PROOF_SIZE};
pub use errors::{NizkError, Result};
pub use keys::{Fingerprint, MessageKey};
pub use proof::Proof;
pub use suite::Nizk;
pub use transcript::HashSuite;
