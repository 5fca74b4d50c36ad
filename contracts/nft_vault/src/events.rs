use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol, Vec};

const EVENT_UNLOCKED: Symbol = symbol_short!("unlocked");
const EVENT_CLAIMED: Symbol = symbol_short!("claimed");

/// Which claim path settled a payout.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimStrategy {
    /// Units found by enumerating the account's holdings.
    Enumeration = 0,
    /// Units listed explicitly by the caller.
    UnitList = 1,
    /// Count proven against the published snapshot root.
    Snapshot = 2,
}

/// Data of the `claimed` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimReceipt {
    pub strategy: ClaimStrategy,
    pub amount: i128,
    /// Units newly marked as claimed; empty for snapshot claims.
    pub units: Vec<u32>,
    /// Leaf newly marked as claimed; only set for snapshot claims.
    pub leaf: Option<BytesN<32>>,
}

pub fn vault_unlocked(env: &Env, owner: &Address, root: &BytesN<32>) {
    env.events()
        .publish((EVENT_UNLOCKED, owner.clone()), root.clone());
}

pub fn units_claimed(
    env: &Env,
    account: &Address,
    strategy: ClaimStrategy,
    amount: i128,
    units: Vec<u32>,
) {
    let receipt = ClaimReceipt {
        strategy,
        amount,
        units,
        leaf: None,
    };
    env.events()
        .publish((EVENT_CLAIMED, account.clone()), receipt);
}

pub fn snapshot_claimed(env: &Env, account: &Address, amount: i128, leaf: &BytesN<32>) {
    let receipt = ClaimReceipt {
        strategy: ClaimStrategy::Snapshot,
        amount,
        units: Vec::new(env),
        leaf: Some(leaf.clone()),
    };
    env.events()
        .publish((EVENT_CLAIMED, account.clone()), receipt);
}
