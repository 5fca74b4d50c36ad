use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::constants::{
    CLAIM_BUMP_AMOUNT, CLAIM_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};

/// Immutable per-vault configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub owner: Address,
    pub distribution_token: Address,
    pub entitlement_collection: Address,
    pub unlock_date: u64,
}

/// Storage keys. Configuration, root and seal flag live in instance storage;
/// the two replay namespaces live in persistent storage, one entry per mark.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    CommitmentRoot,
    /// Set once a snapshot claim has paid out under the current root.
    RootSealed,
    /// Unit redeemed through enumeration or an explicit unit list.
    ClaimedUnit(u32),
    /// Snapshot leaf redeemed through a Merkle proof.
    ClaimedLeaf(BytesN<32>),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn write_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> VaultConfig {
    // The constructor always runs before any other entry point can be invoked.
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic!("vault config missing"))
}

pub fn read_root(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&DataKey::CommitmentRoot)
}

pub fn write_root(env: &Env, root: &BytesN<32>) {
    env.storage().instance().set(&DataKey::CommitmentRoot, root);
}

pub fn is_root_sealed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::RootSealed)
        .unwrap_or(false)
}

pub fn seal_root(env: &Env) {
    env.storage().instance().set(&DataKey::RootSealed, &true);
}

pub fn is_unit_claimed(env: &Env, unit_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::ClaimedUnit(unit_id))
}

pub fn mark_unit_claimed(env: &Env, unit_id: u32) {
    mark(env, &DataKey::ClaimedUnit(unit_id));
}

pub fn is_leaf_claimed(env: &Env, leaf: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ClaimedLeaf(leaf.clone()))
}

pub fn mark_leaf_claimed(env: &Env, leaf: &BytesN<32>) {
    mark(env, &DataKey::ClaimedLeaf(leaf.clone()));
}

fn mark(env: &Env, key: &DataKey) {
    let storage = env.storage().persistent();
    storage.set(key, &true);
    storage.extend_ttl(key, CLAIM_LIFETIME_THRESHOLD, CLAIM_BUMP_AMOUNT);
}
