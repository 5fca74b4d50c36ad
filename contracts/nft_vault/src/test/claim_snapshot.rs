use soroban_sdk::{testutils::Address as _, Address, BytesN};

use super::*;
use crate::{leaf_hash, ClaimStrategy, VaultError};

// ── Happy path ──────────────────────────────────────────────────────────────

#[test]
fn s1_snapshot_claims_pay_committed_counts() {
    for (index, expected) in [(0usize, 10i128), (1, 20), (2, 30), (3, 40)] {
        let s = unlocked_setup(&[1, 2, 3, 4], 100);
        let tree = s.publish_snapshot();
        let holder = s.holders[index].clone();

        let paid = s
            .vault
            .claim(&holder, &s.counts[index], &tree.proof(index as u32));

        assert_eq!(paid, expected);
        assert_eq!(s.balance_of(&holder), expected);
        assert!(s.vault.is_snapshot_claimed(&holder, &s.counts[index]));
    }
}

#[test]
fn s2_snapshot_claim_emits_receipt() {
    let s = unlocked_setup(&[1, 2, 3, 4], 100);
    let tree = s.publish_snapshot();
    let holder = s.holders[2].clone();

    s.vault.claim(&holder, &3, &tree.proof(2));

    let (account, receipt) = s.last_claim_event();
    assert_eq!(account, holder);
    assert_eq!(
        receipt,
        ClaimReceipt {
            strategy: ClaimStrategy::Snapshot,
            amount: 30,
            units: soroban_sdk::Vec::new(&s.env),
            leaf: Some(tree.leaf(2)),
        }
    );
    assert_eq!(tree.leaf(2), leaf_hash(&s.env, &holder, 3));
}

#[test]
fn s3_single_entry_snapshot_uses_empty_proof() {
    let s = unlocked_setup(&[5], 60);
    let tree = s.publish_snapshot();
    assert_eq!(tree.root(), tree.leaf(0));

    let paid = s
        .vault
        .claim(&s.holders[0], &5, &soroban_sdk::Vec::new(&s.env));
    assert_eq!(paid, 60);
}

#[test]
fn s4_promoted_last_leaf_verifies() {
    let s = unlocked_setup(&[1, 1, 1, 1, 1, 1, 1], 70);
    let tree = s.publish_snapshot();

    assert_eq!(s.vault.claim(&s.holders[6], &1, &tree.proof(6)), 10);
    // 1 * 60 / 7
    assert_eq!(s.vault.claim(&s.holders[5], &1, &tree.proof(5)), 8);
}

#[test]
fn s5_stale_count_still_pays_after_units_move() {
    let s = unlocked_setup(&[1, 2, 3, 4], 100);
    let tree = s.publish_snapshot();
    let holder = s.holders[3].clone();
    let buyer = Address::generate(&s.env);
    for unit in s.units_of(3).iter() {
        s.collection.transfer(&holder, &buyer, &unit);
    }

    assert_eq!(s.vault.claim(&holder, &4, &tree.proof(3)), 40);
}

// ── Rejections ──────────────────────────────────────────────────────────────

#[test]
fn s6_inflated_count_fails() {
    let s = unlocked_setup(&[1, 2, 3, 4], 100);
    let tree = s.publish_snapshot();

    assert_eq!(
        s.vault.try_claim(&s.holders[0], &2, &tree.proof(0)),
        Err(Ok(VaultError::InvalidProof))
    );
    assert_eq!(s.vault.vault_balance(), 100);
}

#[test]
fn s7_replayed_proof_fails() {
    let s = unlocked_setup(&[1, 2, 3, 4], 100);
    let tree = s.publish_snapshot();
    let holder = s.holders[1].clone();
    s.vault.claim(&holder, &2, &tree.proof(1));

    assert_eq!(
        s.vault.try_claim(&holder, &2, &tree.proof(1)),
        Err(Ok(VaultError::AlreadyClaimed))
    );
    assert_eq!(s.balance_of(&holder), 20);
}

#[test]
fn s8_claim_without_root_fails() {
    let s = unlocked_setup(&[1, 2], 100);
    let tree = s.snapshot();

    assert_eq!(
        s.vault.try_claim(&s.holders[0], &1, &tree.proof(0)),
        Err(Ok(VaultError::NoCommitmentRoot))
    );
}

#[test]
fn s9_valid_proof_before_unlock_fails() {
    let s = create_setup(&[1, 2], 100, NOW + 30 * DAY);
    let tree = s.publish_snapshot();

    assert_eq!(
        s.vault.try_claim(&s.holders[1], &2, &tree.proof(1)),
        Err(Ok(VaultError::VaultLocked))
    );
}

#[test]
fn s10_borrowed_proof_fails_for_other_account() {
    let s = unlocked_setup(&[1, 2, 3, 4], 100);
    let tree = s.publish_snapshot();
    let stranger = Address::generate(&s.env);

    assert_eq!(
        s.vault.try_claim(&stranger, &4, &tree.proof(3)),
        Err(Ok(VaultError::InvalidProof))
    );
    assert_eq!(
        s.vault.try_claim(&s.holders[2], &4, &tree.proof(3)),
        Err(Ok(VaultError::InvalidProof))
    );
}

#[test]
fn s11_oversized_proof_fails() {
    let s = unlocked_setup(&[1, 2], 100);
    s.publish_snapshot();

    let mut proof = soroban_sdk::Vec::new(&s.env);
    for i in 0u8..33 {
        proof.push_back(BytesN::from_array(&s.env, &[i; 32]));
    }

    assert_eq!(
        s.vault.try_claim(&s.holders[0], &1, &proof),
        Err(Ok(VaultError::InvalidProof))
    );
}

#[test]
fn s12_burned_supply_exceeding_balance_fails() {
    let s = unlocked_setup(&[4, 4], 80);
    let tree = s.publish_snapshot();

    // Live supply drops to 3 while the snapshot still says 4.
    for unit in s.units_of(1).iter() {
        s.collection.burn(&s.holders[1], &unit);
    }
    s.collection.burn(&s.holders[0], &0);

    assert_eq!(
        s.vault.try_claim(&s.holders[0], &4, &tree.proof(0)),
        Err(Ok(VaultError::InsufficientBalance))
    );
    assert!(!s.vault.is_snapshot_claimed(&s.holders[0], &4));
}

// ── Independence from unit claims ───────────────────────────────────────────

#[test]
fn s13_unit_and_snapshot_claims_do_not_block_each_other() {
    let s = unlocked_setup(&[1, 2, 3, 4], 100);
    let tree = s.publish_snapshot();
    let holder = s.holders[3].clone();

    assert_eq!(s.vault.claim_all(&holder), 40);
    // 4 * 60 / 10
    assert_eq!(s.vault.claim(&holder, &4, &tree.proof(3)), 24);
    assert_eq!(s.balance_of(&holder), 64);
}

#[test]
fn s14_snapshot_claim_does_not_mark_units() {
    let s = unlocked_setup(&[2, 2], 100);
    let tree = s.publish_snapshot();
    let holder = s.holders[0].clone();

    s.vault.claim(&holder, &2, &tree.proof(0));

    assert!(!s.vault.is_unit_claimed(&0));
    assert!(!s.vault.is_unit_claimed(&1));
    assert!(s.vault.is_snapshot_claimed(&holder, &2));
    assert!(!s.vault.is_snapshot_claimed(&holder, &1));
}
