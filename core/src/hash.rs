//! Timelock entry keys

use crate::Action;
use sha2::{Digest, Sha256};

/// Key for a queued timelock entry: sha256 over the serialized
/// (action, eta) pair. Identical action + eta pairs collide by design,
/// which is what makes duplicate queueing detectable.
pub fn entry_key(action: &Action, eta: u64) -> String {
    let bytes = bincode::serialize(&(action, eta)).expect("action serialization");
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    hex::encode(hasher.finalize())
}
