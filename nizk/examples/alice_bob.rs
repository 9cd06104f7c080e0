//! Alice proves she knows a message; Bob, who knows it too, checks the proof
//! without either of them sending the message.
//!
//! Run with `RUST_LOG=info` to see the flow, and `NIZK_SUITE=ed25519_sha256`
//! to switch suites.

use nizk::{Fingerprint, Nizk, Proof};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let suite = std::env::var("NIZK_SUITE").unwrap_or_else(|_| "ed25519_sha3".to_owned());
    let zk: Nizk = suite.parse().expect("known suite name");
    info!(suite = %zk.suite(), "suite selected");

    let message = b"Arbitrary message which knowledge you want to prove.";
    // Public context both sides agreed on out of band.
    let stamp = b"any other information you want to include to the proof: public keys, salts, symmetric keys, etc.";

    // Alice
    let (proof, fingerprint) = zk.prove(message, stamp).expect("prove");
    let published_proof = bincode::serialize(&proof).expect("serialize proof");
    let published_fingerprint = bincode::serialize(&fingerprint).expect("serialize fingerprint");
    info!(%fingerprint, proof_len = published_proof.len(), "alice published fingerprint and proof");

    // Bob
    let alice_fingerprint: Fingerprint =
        bincode::deserialize(&published_fingerprint).expect("deserialize fingerprint");
    let alice_proof: Proof = bincode::deserialize(&published_proof).expect("deserialize proof");

    let bob_fingerprint = zk.fingerprint(message).expect("fingerprint");
    if bob_fingerprint != alice_fingerprint {
        error!("fingerprints differ, so the messages differ; nothing to check");
        return;
    }

    match zk.verify(alice_fingerprint.as_bytes(), stamp, &alice_proof.to_bytes()) {
        Ok(true) => info!("alice knows the message"),
        Ok(false) => error!("proof is invalid"),
        Err(err) => error!(%err, "proof is malformed"),
    }
}
