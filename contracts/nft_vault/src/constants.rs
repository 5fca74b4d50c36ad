// ---------------------------------------------------------------------------
// Storage lifetime
// ---------------------------------------------------------------------------

/// Ledgers per day at a 5 second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage (configuration and commitment root) is kept alive for 30 days
/// past the last state-changing call.
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Replay marks must outlive the vault's useful life, so they get a longer extension.
pub const CLAIM_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub const CLAIM_LIFETIME_THRESHOLD: u32 = CLAIM_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ---------------------------------------------------------------------------
// Claim limits
// ---------------------------------------------------------------------------

/// Maximum number of units a single enumeration or unit-list claim may process.
/// Keeps the per-call resource footprint inside Soroban transaction limits.
pub const MAX_UNITS_PER_CLAIM: u32 = 200;

/// Maximum Merkle proof depth; covers trees of up to 2^32 snapshot entries.
pub const MAX_PROOF_LENGTH: u32 = 32;
