//! Domain-separated state fingerprints for duplicate detection.
//!
//! Algorithm: SHA-256 over the domain prefix followed by the state's
//! identity bytes, rendered as a lowercase hex digest. Fingerprint equality
//! stands in for the state equality contract, so visited-set lookups are
//! O(1) average instead of a pairwise scan over every expanded state.

use sha2::{Digest, Sha256};

use crate::contract::SearchState;

/// Domain prefix for state fingerprints (null-terminated).
pub const DOMAIN_STATE: &[u8] = b"statewalk::state\0";

/// Compute the fingerprint of a state's identity bytes.
#[must_use]
pub fn state_fingerprint<S: SearchState>(state: &S) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_STATE);
    hasher.update(state.identity_bytes());
    hex::encode(hasher.finalize())
}
