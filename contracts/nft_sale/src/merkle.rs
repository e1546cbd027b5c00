//! Proof verification against the sale's commitment roots.
//!
//! Leaves are double-hashed and proof siblings are combined with a
//! commutative sorted-pair keccak, so off-chain tooling can build standard
//! sorted Merkle trees without encoding sibling positions.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, Vec};

/// Leaf for eligibility proofs: the address alone.
pub fn address_leaf(env: &Env, addr: &Address) -> BytesN<32> {
    double_keccak(env, &addr.clone().to_xdr(env))
}

/// Leaf for claim/refund proofs: `(address, cumulative quantity)`.
pub fn allowance_leaf(env: &Env, addr: &Address, cumulative: u64) -> BytesN<32> {
    double_keccak(env, &(addr.clone(), cumulative).to_xdr(env))
}

pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (lo, hi) = if a.to_array() <= b.to_array() {
        (a, b)
    } else {
        (b, a)
    };
    let mut payload: Bytes = Bytes::from(lo.clone());
    payload.append(&Bytes::from(hi.clone()));
    env.crypto().keccak256(&payload).into()
}

/// Recompute the root from `leaf` and `proof` and compare to `root`.
/// A zero root never verifies: an unset proof class admits nobody.
pub fn verify(env: &Env, proof: &Vec<BytesN<32>>, root: &BytesN<32>, leaf: &BytesN<32>) -> bool {
    if *root == zero_root(env) {
        return false;
    }
    let mut node = leaf.clone();
    for sibling in proof.iter() {
        node = hash_pair(env, &node, &sibling);
    }
    node == *root
}

pub fn zero_root(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

fn double_keccak(env: &Env, payload: &Bytes) -> BytesN<32> {
    let inner: BytesN<32> = env.crypto().keccak256(payload).into();
    env.crypto().keccak256(&Bytes::from(inner)).into()
}
