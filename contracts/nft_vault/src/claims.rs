//! The three claim strategies.
//!
//! Each strategy establishes an entitlement count its own way and keeps its own
//! replay namespace, then settles through the same pro-rata formula:
//!
//! - enumeration: every unclaimed unit the account currently holds
//! - unit list: exactly the units the caller names, all of which must be held and unclaimed
//! - snapshot: the count committed for the account in the published Merkle root
//!
//! Replay marks are written before the outgoing transfer, so a failed transfer
//! rolls them back together with the rest of the invocation.

use soroban_sdk::{log, token, Address, BytesN, Env, Map, Vec};

use crate::constants::{MAX_PROOF_LENGTH, MAX_UNITS_PER_CLAIM};
use crate::entitlement::EntitlementClient;
use crate::error::VaultError;
use crate::events::{self, ClaimStrategy};
use crate::merkle;
use crate::payout;
use crate::storage::{self, VaultConfig};

pub fn require_unlocked(env: &Env, config: &VaultConfig) -> Result<(), VaultError> {
    if env.ledger().timestamp() < config.unlock_date {
        return Err(VaultError::VaultLocked);
    }
    Ok(())
}

pub fn live_balance(env: &Env, config: &VaultConfig) -> i128 {
    token::Client::new(env, &config.distribution_token).balance(&env.current_contract_address())
}

/// Share for `count` units against the live balance and live total supply.
pub fn share_of(env: &Env, config: &VaultConfig, count: u32) -> Result<i128, VaultError> {
    let supply = EntitlementClient::new(env, &config.entitlement_collection).total_supply();
    payout::pro_rata(count, live_balance(env, config), supply)
}

pub fn claim_all(env: &Env, account: &Address) -> Result<i128, VaultError> {
    let config = storage::read_config(env);
    require_unlocked(env, &config)?;

    let collection = EntitlementClient::new(env, &config.entitlement_collection);
    let held = collection.balance(account);
    if held > MAX_UNITS_PER_CLAIM {
        return Err(VaultError::TooManyUnits);
    }

    let mut units = Vec::new(env);
    for index in 0..held {
        let unit = collection.token_of_owner_by_index(account, &index);
        if !storage::is_unit_claimed(env, unit) {
            units.push_back(unit);
        }
    }
    if held > 0 && units.is_empty() {
        return Err(VaultError::AlreadyClaimed);
    }

    settle_units(env, &config, account, ClaimStrategy::Enumeration, units)
}

pub fn claim_multiple(
    env: &Env,
    account: &Address,
    unit_ids: Vec<u32>,
) -> Result<i128, VaultError> {
    let config = storage::read_config(env);
    require_unlocked(env, &config)?;

    if unit_ids.len() > MAX_UNITS_PER_CLAIM {
        return Err(VaultError::TooManyUnits);
    }

    let collection = EntitlementClient::new(env, &config.entitlement_collection);
    let mut seen: Map<u32, bool> = Map::new(env);
    for unit in unit_ids.iter() {
        if seen.contains_key(unit) {
            return Err(VaultError::DuplicateUnit);
        }
        seen.set(unit, true);

        // Unminted ids make the collection fail; that is still "not owned".
        match collection.try_owner_of(&unit) {
            Ok(Ok(owner)) if owner == *account => {}
            _ => return Err(VaultError::NotOwner),
        }

        if storage::is_unit_claimed(env, unit) {
            return Err(VaultError::AlreadyClaimed);
        }
    }

    settle_units(env, &config, account, ClaimStrategy::UnitList, unit_ids)
}

pub fn claim_snapshot(
    env: &Env,
    account: &Address,
    count: u32,
    proof: Vec<BytesN<32>>,
) -> Result<i128, VaultError> {
    let config = storage::read_config(env);
    require_unlocked(env, &config)?;

    let root = storage::read_root(env).ok_or(VaultError::NoCommitmentRoot)?;
    if proof.len() > MAX_PROOF_LENGTH {
        return Err(VaultError::InvalidProof);
    }

    let leaf = merkle::leaf_hash(env, account, count);
    if !merkle::verify(env, &proof, &root, leaf.clone()) {
        return Err(VaultError::InvalidProof);
    }
    if storage::is_leaf_claimed(env, &leaf) {
        return Err(VaultError::AlreadyClaimed);
    }

    let amount = share_of(env, &config, count)?;

    storage::mark_leaf_claimed(env, &leaf);
    storage::seal_root(env);
    transfer_out(env, &config, account, amount);

    log!(env, "snapshot claim", account.clone(), count, amount);
    events::snapshot_claimed(env, account, amount, &leaf);
    storage::bump_instance(env);

    Ok(amount)
}

fn settle_units(
    env: &Env,
    config: &VaultConfig,
    account: &Address,
    strategy: ClaimStrategy,
    units: Vec<u32>,
) -> Result<i128, VaultError> {
    let amount = share_of(env, config, units.len())?;

    for unit in units.iter() {
        storage::mark_unit_claimed(env, unit);
    }
    transfer_out(env, config, account, amount);

    log!(env, "unit claim", account.clone(), units.len(), amount);
    events::units_claimed(env, account, strategy, amount, units);
    storage::bump_instance(env);

    Ok(amount)
}

fn transfer_out(env: &Env, config: &VaultConfig, account: &Address, amount: i128) {
    token::Client::new(env, &config.distribution_token).transfer(
        &env.current_contract_address(),
        account,
        &amount,
    );
}
