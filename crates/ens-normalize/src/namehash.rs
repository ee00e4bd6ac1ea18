//! EIP-137 name hashing.

use alloy_primitives::{B256, keccak256};

/// Hashes a single label.
pub fn labelhash(label: &str) -> B256 {
    keccak256(label.as_bytes())
}

/// Computes the EIP-137 node of an already normalized name.
///
/// The empty name is the root node, `B256::ZERO`.
pub fn namehash(name: &str) -> B256 {
    if name.is_empty() {
        return B256::ZERO;
    }
    name.rsplit('.').fold(B256::ZERO, |node, label| {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(labelhash(label).as_slice());
        keccak256(buf)
    })
}
