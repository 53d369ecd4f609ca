//! Scene fingerprinting using xxHash3.
//!
//! Hosts that re-render on every event can skip patching when the produced
//! scene is unchanged; the fingerprint gives them a cheap equality proxy.

use xxhash_rust::xxh3::xxh3_64;

use crate::node::Node;

/// Compute a 64-bit hash of the given bytes using xxHash3.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Fingerprint a scene node over its canonical JSON encoding.
pub fn fingerprint(node: &Node) -> u64 {
    let encoded = serde_json::to_vec(node).unwrap_or_default();
    hash_bytes(&encoded)
}

/// Fingerprint a scene node and return as a 16-character hex string.
pub fn fingerprint_hex(node: &Node) -> String {
    format!("{:016x}", fingerprint(node))
}
