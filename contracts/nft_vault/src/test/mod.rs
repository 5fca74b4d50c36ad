#![cfg(test)]

extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, IntoVal, Symbol,
};

use crate::testutils::{SnapshotTree, TestCollection, TestCollectionClient};
use crate::{ClaimReceipt, NftVault, NftVaultClient};

mod claim_snapshot;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const NOW: u64 = 1_700_000_000;
const DAY: u64 = 86_400;

struct Setup {
    env: Env,
    vault: NftVaultClient<'static>,
    vault_id: Address,
    token: TokenClient<'static>,
    token_id: Address,
    collection: TestCollectionClient<'static>,
    collection_id: Address,
    owner: Address,
    /// One account per entry of `counts`, in order.
    holders: std::vec::Vec<Address>,
    counts: std::vec::Vec<u32>,
}

/// Mints `counts[i]` units to holder `i` (ids are sequential from zero), deploys a
/// vault unlocking at `unlock_date` and funds it with `funding` tokens.
fn create_setup(counts: &[u32], funding: i128, unlock_date: u64) -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    #[allow(deprecated)]
    env.budget().reset_unlimited();
    env.ledger().with_mut(|l| l.timestamp = NOW);

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token_id = env.register_stellar_asset_contract_v2(token_admin).address();

    let collection_id = env.register(TestCollection, ());
    let collection = TestCollectionClient::new(&env, &collection_id);
    let holders: std::vec::Vec<Address> = counts
        .iter()
        .map(|count| {
            let holder = Address::generate(&env);
            collection.mint(&holder, count);
            holder
        })
        .collect();

    let vault_id = env.register(
        NftVault,
        (
            owner.clone(),
            token_id.clone(),
            collection_id.clone(),
            unlock_date,
        ),
    );
    let vault = NftVaultClient::new(&env, &vault_id);

    if funding > 0 {
        StellarAssetClient::new(&env, &token_id).mint(&vault_id, &funding);
    }

    Setup {
        token: TokenClient::new(&env, &token_id),
        env,
        vault,
        vault_id,
        token_id,
        collection,
        collection_id,
        owner,
        holders,
        counts: counts.to_vec(),
    }
}

/// Vault that is already unlocked.
fn unlocked_setup(counts: &[u32], funding: i128) -> Setup {
    create_setup(counts, funding, NOW - DAY)
}

impl Setup {
    /// Snapshot of the current holders and counts.
    fn snapshot(&self) -> SnapshotTree {
        let entries: std::vec::Vec<(Address, u32)> = self
            .holders
            .iter()
            .cloned()
            .zip(self.counts.iter().copied())
            .collect();
        SnapshotTree::new(&self.env, &entries)
    }

    /// Builds a snapshot and publishes its root.
    fn publish_snapshot(&self) -> SnapshotTree {
        let tree = self.snapshot();
        self.vault.unlock_vault(&tree.root());
        tree
    }

    fn balance_of(&self, account: &Address) -> i128 {
        self.token.balance(account)
    }

    /// Unit ids minted to holder `index`.
    fn units_of(&self, index: usize) -> soroban_sdk::Vec<u32> {
        let first: u32 = self.counts[..index].iter().sum();
        let mut units = soroban_sdk::Vec::new(&self.env);
        for id in first..first + self.counts[index] {
            units.push_back(id);
        }
        units
    }

    fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    /// Topic symbol and receipt of the most recent `claimed` event.
    fn last_claim_event(&self) -> (Address, ClaimReceipt) {
        let (contract, topics, data) = self.env.events().all().last_unchecked();
        assert_eq!(contract, self.vault_id);

        let name: Symbol = topics.get_unchecked(0).into_val(&self.env);
        assert_eq!(name, Symbol::new(&self.env, "claimed"));
        let account: Address = topics.get_unchecked(1).into_val(&self.env);
        (account, data.into_val(&self.env))
    }
}
