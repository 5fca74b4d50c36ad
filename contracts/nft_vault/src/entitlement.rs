use soroban_sdk::{contractclient, Address, Env};

/// Enumerable non-fungible collection whose units entitle holders to a share of
/// the vault. Any contract exposing these functions can back a vault.
#[allow(dead_code)]
#[contractclient(name = "EntitlementClient")]
pub trait EntitlementCollection {
    /// Current owner of `token_id`. Fails for ids that were never minted.
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Number of units held by `owner`.
    fn balance(env: Env, owner: Address) -> u32;

    /// The `index`-th unit held by `owner`, for `index < balance(owner)`.
    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> u32;

    /// Total number of units issued across the collection.
    fn total_supply(env: Env) -> u32;
}
