//! Test doubles shared by the vault and factory test suites.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

use crate::entitlement::EntitlementCollection;

pub use crate::merkle::SnapshotTree;

#[contracttype]
#[derive(Clone)]
enum CollectionKey {
    NextId,
    Supply,
    Owner(u32),
    Holdings(Address),
}

/// Minimal enumerable collection. Ids are minted sequentially from zero.
#[contract]
pub struct TestCollection;

#[contractimpl]
impl TestCollection {
    /// Mints `count` consecutive ids to `to` and returns the first one.
    pub fn mint(env: Env, to: Address, count: u32) -> u32 {
        let first: u32 = env.storage().instance().get(&CollectionKey::NextId).unwrap_or(0);
        let mut holdings = holdings_of(&env, &to);
        for id in first..first + count {
            env.storage().instance().set(&CollectionKey::Owner(id), &to);
            holdings.push_back(id);
        }
        env.storage()
            .instance()
            .set(&CollectionKey::Holdings(to), &holdings);
        env.storage()
            .instance()
            .set(&CollectionKey::NextId, &(first + count));
        let supply: u32 = env.storage().instance().get(&CollectionKey::Supply).unwrap_or(0);
        env.storage()
            .instance()
            .set(&CollectionKey::Supply, &(supply + count));
        first
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        take(&env, &from, token_id);

        env.storage().instance().set(&CollectionKey::Owner(token_id), &to);
        let mut holdings = holdings_of(&env, &to);
        holdings.push_back(token_id);
        env.storage()
            .instance()
            .set(&CollectionKey::Holdings(to), &holdings);
    }

    pub fn burn(env: Env, from: Address, token_id: u32) {
        from.require_auth();
        take(&env, &from, token_id);

        env.storage().instance().remove(&CollectionKey::Owner(token_id));
        let supply: u32 = env.storage().instance().get(&CollectionKey::Supply).unwrap_or(0);
        env.storage()
            .instance()
            .set(&CollectionKey::Supply, &(supply - 1));
    }
}

#[contractimpl]
impl EntitlementCollection for TestCollection {
    fn owner_of(env: Env, token_id: u32) -> Address {
        env.storage()
            .instance()
            .get(&CollectionKey::Owner(token_id))
            .unwrap_or_else(|| panic!("token does not exist"))
    }

    fn balance(env: Env, owner: Address) -> u32 {
        holdings_of(&env, &owner).len()
    }

    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> u32 {
        holdings_of(&env, &owner)
            .get(index)
            .unwrap_or_else(|| panic!("owner index out of bounds"))
    }

    fn total_supply(env: Env) -> u32 {
        env.storage().instance().get(&CollectionKey::Supply).unwrap_or(0)
    }
}

fn holdings_of(env: &Env, owner: &Address) -> Vec<u32> {
    env.storage()
        .instance()
        .get(&CollectionKey::Holdings(owner.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

fn take(env: &Env, from: &Address, token_id: u32) {
    let mut holdings = holdings_of(env, from);
    let index = holdings
        .first_index_of(token_id)
        .unwrap_or_else(|| panic!("not the token owner"));
    holdings.remove(index);
    env.storage()
        .instance()
        .set(&CollectionKey::Holdings(from.clone()), &holdings);
}
