#![no_std]

//! Deploys NFT-gated distribution vaults from a single uploaded template.
//!
//! Every vault is a fresh contract instance running the same wasm, initialised
//! through its constructor in the same invocation that deploys it.

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, panic_with_error,
    symbol_short, Address, Bytes, BytesN, Env, Symbol,
};

contractmeta!(
    key = "Description",
    val = "Factory deploying NFT-gated distribution vaults from one template"
);

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

const EVENT_NEW_VAULT: Symbol = symbol_short!("new_vault");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum FactoryError {
    /// The template hash is all zeroes.
    InvalidTemplate = 1,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    VaultWasmHash,
    Sequence,
}

#[contract]
pub struct VaultFactory;

#[contractimpl]
impl VaultFactory {
    /// Records the hash of the uploaded vault wasm. Immutable afterwards.
    pub fn __constructor(env: Env, vault_wasm_hash: BytesN<32>) {
        if vault_wasm_hash.to_array() == [0u8; 32] {
            panic_with_error!(&env, FactoryError::InvalidTemplate);
        }
        env.storage()
            .instance()
            .set(&DataKey::VaultWasmHash, &vault_wasm_hash);
        env.storage().instance().set(&DataKey::Sequence, &0u32);
        bump_instance(&env);
    }

    pub fn vault_implementation(env: Env) -> BytesN<32> {
        read_template(&env)
    }

    /// Number of vaults deployed so far.
    pub fn vaults_created(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Sequence)
            .unwrap_or(0)
    }

    /// Deploys a vault owned by `creator` and returns its address.
    ///
    /// The deployment salt is derived from a per-factory counter, so two vaults
    /// with identical parameters still land at different addresses.
    pub fn create_vault(
        env: Env,
        creator: Address,
        distribution_token: Address,
        entitlement_collection: Address,
        unlock_date: u64,
    ) -> Address {
        creator.require_auth();

        let wasm_hash = read_template(&env);
        let sequence = Self::vaults_created(env.clone());
        let salt: BytesN<32> = env
            .crypto()
            .sha256(&Bytes::from_array(&env, &sequence.to_be_bytes()))
            .into();

        let vault = env.deployer().with_current_contract(salt).deploy_v2(
            wasm_hash,
            (
                creator.clone(),
                distribution_token,
                entitlement_collection,
                unlock_date,
            ),
        );

        env.storage()
            .instance()
            .set(&DataKey::Sequence, &(sequence + 1));
        bump_instance(&env);

        log!(&env, "vault created", vault.clone(), sequence);
        env.events()
            .publish((EVENT_NEW_VAULT, creator), vault.clone());

        vault
    }
}

fn read_template(env: &Env) -> BytesN<32> {
    match env.storage().instance().get(&DataKey::VaultWasmHash) {
        Some(hash) => hash,
        None => panic_with_error!(env, FactoryError::InvalidTemplate),
    }
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
