//! Merkle proof verification for withdrawal claims.
//!
//! Proofs are verified against a root published by the merkle updater. The
//! tree uses commutative pair hashing: each internal node is the keccak256 of
//! its two children concatenated smaller-first, where "smaller" compares the
//! 32-byte values as big-endian unsigned integers. Because of this ordering
//! rule a proof carries only sibling hashes, deepest level first, with no
//! left/right position bits.

use crate::hash::keccak256;

/// Maximum accepted proof length. A tree deeper than this is not something
/// the relayer ever produces, so longer proofs are treated as non-membership.
pub const MAX_PROOF_DEPTH: usize = 32;

/// Hash an ordered pair of nodes into their parent node
///
/// The two children are concatenated smaller-first before hashing, so the
/// result is identical regardless of argument order.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 64];
    // Byte-wise comparison of equal-length arrays matches big-endian
    // unsigned integer ordering.
    if a.as_slice() <= b.as_slice() {
        data[0..32].copy_from_slice(a);
        data[32..64].copy_from_slice(b);
    } else {
        data[0..32].copy_from_slice(b);
        data[32..64].copy_from_slice(a);
    }
    keccak256(&data)
}

/// Check whether `leaf` is a member of the tree committed to by `root`
///
/// Walks the proof from the leaf upward, combining the accumulator with each
/// sibling hash, and compares the final accumulator to the root. An empty
/// proof is valid exactly when the leaf itself is the root. Returns false for
/// any failure, including proofs longer than [`MAX_PROOF_DEPTH`]; membership
/// checks never error.
pub fn verify(leaf: &[u8; 32], proof: &[[u8; 32]], root: &[u8; 32]) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }

    let mut acc = *leaf;
    for sibling in proof {
        acc = hash_pair(&acc, sibling);
    }
    acc == *root
}
