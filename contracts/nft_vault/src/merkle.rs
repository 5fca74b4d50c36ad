//! Snapshot commitments over `(account, count)` pairs.
//!
//! Leaf:          keccak256(xdr(account) || be32(count))
//! Internal node: keccak256(min(a, b) || max(a, b))
//!
//! Sorting each pair makes a proof independent of the leaf's left/right position,
//! so a proof is just the list of sibling hashes from the leaf up to the root.
//! Any off-chain snapshot generator must reproduce this bit-exactly.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// Leaf commitment for one snapshot entry.
pub fn leaf_hash(env: &Env, account: &Address, count: u32) -> BytesN<32> {
    let mut data: Bytes = account.clone().to_xdr(env);
    data.extend_from_array(&count.to_be_bytes());
    env.crypto().keccak256(&data).into()
}

/// Parent of two nodes, smaller operand first.
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (a, b) = (a.to_array(), b.to_array());
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let mut data = Bytes::from_array(env, &first);
    data.extend_from_array(&second);
    env.crypto().keccak256(&data).into()
}

/// Walks `proof` from `leaf` and compares the result against `root`.
pub fn verify(env: &Env, proof: &Vec<BytesN<32>>, root: &BytesN<32>, leaf: BytesN<32>) -> bool {
    let mut computed = leaf;
    for sibling in proof.iter() {
        computed = hash_pair(env, &computed, &sibling);
    }
    computed == *root
}

/// Reference snapshot builder, matching [`verify`].
///
/// An odd node at the end of a level is promoted unchanged to the next level.
#[cfg(any(test, feature = "testutils"))]
pub struct SnapshotTree {
    env: Env,
    /// levels[0] holds the leaves, the last level holds the root.
    levels: Vec<Vec<BytesN<32>>>,
}

#[cfg(any(test, feature = "testutils"))]
impl SnapshotTree {
    pub fn new(env: &Env, entries: &[(Address, u32)]) -> Self {
        assert!(!entries.is_empty(), "snapshot must contain at least one entry");

        let mut leaves = Vec::new(env);
        for (account, count) in entries {
            leaves.push_back(leaf_hash(env, account, *count));
        }

        let mut levels = Vec::new(env);
        levels.push_back(leaves.clone());

        let mut current = leaves;
        while current.len() > 1 {
            let mut next = Vec::new(env);
            let mut i = 0;
            while i < current.len() {
                let left = current.get_unchecked(i);
                if i + 1 < current.len() {
                    next.push_back(hash_pair(env, &left, &current.get_unchecked(i + 1)));
                } else {
                    next.push_back(left);
                }
                i += 2;
            }
            levels.push_back(next.clone());
            current = next;
        }

        SnapshotTree {
            env: env.clone(),
            levels,
        }
    }

    pub fn root(&self) -> BytesN<32> {
        self.levels.last_unchecked().get_unchecked(0)
    }

    pub fn leaf(&self, index: u32) -> BytesN<32> {
        self.levels.get_unchecked(0).get_unchecked(index)
    }

    /// Sibling path for the leaf at `index`.
    pub fn proof(&self, index: u32) -> Vec<BytesN<32>> {
        assert!(
            index < self.levels.get_unchecked(0).len(),
            "leaf index out of bounds"
        );

        let mut proof = Vec::new(&self.env);
        let mut position = index;
        for depth in 0..self.levels.len() - 1 {
            let level = self.levels.get_unchecked(depth);
            let sibling = position ^ 1;
            // A promoted node has no sibling at this level.
            if sibling < level.len() {
                proof.push_back(level.get_unchecked(sibling));
            }
            position /= 2;
        }
        proof
    }
}
