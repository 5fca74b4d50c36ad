use soroban_sdk::contracterror;

/// Error codes returned by the vault. Every error aborts the whole invocation,
/// so no transfer or replay mark survives a failed claim.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum VaultError {
    // Time gate
    /// Ledger time is still before the unlock date.
    VaultLocked = 1,

    // Snapshot verification
    /// The recomputed root does not match the published commitment root.
    InvalidProof = 2,

    // Replay protection
    /// The unit id or snapshot leaf has already been redeemed.
    AlreadyClaimed = 3,

    // Caller-supplied unit list
    /// A supplied unit is not owned by the target account.
    NotOwner = 4,
    /// The same unit id appears more than once in one call.
    DuplicateUnit = 5,

    // Payout
    /// The computed pro-rata share truncates to zero.
    ZeroAmount = 6,

    // Commitment root administration
    /// No commitment root has been published yet.
    NoCommitmentRoot = 7,
    /// The all-zero root cannot be published.
    InvalidRoot = 8,
    /// A snapshot claim has already settled under the current root.
    RootSealed = 9,

    // Arithmetic and balance
    /// The entitlement collection reports a total supply of zero.
    EmptyCollection = 10,
    ArithmeticOverflow = 11,
    /// The share exceeds the live vault balance.
    InsufficientBalance = 12,

    // Limits
    /// More units than a single claim may process.
    TooManyUnits = 13,
}
