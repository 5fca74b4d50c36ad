#![no_std]

//! NFT-gated distribution vault.
//!
//! A vault holds a balance of one fungible token and, once its unlock date has
//! passed, pays it out to holders of an entitlement collection in proportion to
//! how many units they hold: `floor(count * live_balance / total_supply)`.
//!
//! Holders can claim three ways, each with its own replay protection:
//!
//! - `claim_all`: the vault enumerates the account's units (cheap for few units)
//! - `claim_multiple`: the caller lists the unit ids to redeem
//! - `claim`: the caller proves a count committed in the owner's snapshot root
//!
//! Unit-based claims and snapshot claims track redemption in separate
//! namespaces, so one path never blocks the other.

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

mod claims;
mod constants;
mod entitlement;
mod error;
mod events;
mod merkle;
mod payout;
mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use constants::{MAX_PROOF_LENGTH, MAX_UNITS_PER_CLAIM};
pub use entitlement::{EntitlementClient, EntitlementCollection};
pub use error::VaultError;
pub use events::{ClaimReceipt, ClaimStrategy};
pub use merkle::{hash_pair, leaf_hash, verify};
pub use storage::VaultConfig;

#[contract]
pub struct NftVault;

#[contractimpl]
impl NftVault {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Runs once at deployment. All four values are immutable afterwards.
    pub fn __constructor(
        env: Env,
        owner: Address,
        distribution_token: Address,
        entitlement_collection: Address,
        unlock_date: u64,
    ) {
        storage::write_config(
            &env,
            &VaultConfig {
                owner,
                distribution_token,
                entitlement_collection,
                unlock_date,
            },
        );
        storage::bump_instance(&env);
    }

    // -----------------------------------------------------------------------
    // Configuration accessors
    // -----------------------------------------------------------------------

    pub fn vault_distribution_token(env: Env) -> Address {
        storage::read_config(&env).distribution_token
    }

    pub fn nft_vault_key(env: Env) -> Address {
        storage::read_config(&env).entitlement_collection
    }

    pub fn unlock_date(env: Env) -> u64 {
        storage::read_config(&env).unlock_date
    }

    pub fn owner(env: Env) -> Address {
        storage::read_config(&env).owner
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    /// Live balance of the distribution token held by this vault.
    pub fn vault_balance(env: Env) -> i128 {
        claims::live_balance(&env, &storage::read_config(&env))
    }

    pub fn commitment_root(env: Env) -> Option<BytesN<32>> {
        storage::read_root(&env)
    }

    pub fn is_unlocked(env: Env) -> bool {
        claims::require_unlocked(&env, &storage::read_config(&env)).is_ok()
    }

    pub fn is_unit_claimed(env: Env, unit_id: u32) -> bool {
        storage::is_unit_claimed(&env, unit_id)
    }

    pub fn is_snapshot_claimed(env: Env, account: Address, count: u32) -> bool {
        storage::is_leaf_claimed(&env, &merkle::leaf_hash(&env, &account, count))
    }

    /// What `count` units would be paid right now, without claiming.
    pub fn share_of(env: Env, count: u32) -> Result<i128, VaultError> {
        claims::share_of(&env, &storage::read_config(&env), count)
    }

    // -----------------------------------------------------------------------
    // Administration
    // -----------------------------------------------------------------------

    /// Publishes the snapshot commitment root. Owner only.
    ///
    /// The root may be replaced until the first snapshot claim pays out under it.
    /// Publishing does not depend on the unlock date; claims still do.
    pub fn unlock_vault(env: Env, root: BytesN<32>) -> Result<(), VaultError> {
        let config = storage::read_config(&env);
        config.owner.require_auth();

        if root.to_array() == [0u8; 32] {
            return Err(VaultError::InvalidRoot);
        }
        if storage::is_root_sealed(&env) {
            return Err(VaultError::RootSealed);
        }

        storage::write_root(&env, &root);
        storage::bump_instance(&env);

        log!(&env, "commitment root published", root.clone());
        events::vault_unlocked(&env, &config.owner, &root);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Claims
    // -----------------------------------------------------------------------

    /// Claims the share for `count` units committed to `account` in the snapshot.
    pub fn claim(
        env: Env,
        account: Address,
        count: u32,
        proof: Vec<BytesN<32>>,
    ) -> Result<i128, VaultError> {
        claims::claim_snapshot(&env, &account, count, proof)
    }

    /// Claims the share for the listed units, all of which `account` must hold.
    pub fn claim_multiple(
        env: Env,
        account: Address,
        unit_ids: Vec<u32>,
    ) -> Result<i128, VaultError> {
        claims::claim_multiple(&env, &account, unit_ids)
    }

    /// Claims the share for every unit `account` holds that has not been redeemed.
    pub fn claim_all(env: Env, account: Address) -> Result<i128, VaultError> {
        claims::claim_all(&env, &account)
    }
}

#[cfg(test)]
mod test;
