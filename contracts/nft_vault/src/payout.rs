use crate::error::VaultError;

/// Pro-rata share of `balance` for `count` entitlement units out of `supply`.
///
/// `floor(count * balance / supply)`, truncating toward zero. The remainder stays
/// in the vault. Shared by all three claim strategies.
pub fn pro_rata(count: u32, balance: i128, supply: u32) -> Result<i128, VaultError> {
    if supply == 0 {
        return Err(VaultError::EmptyCollection);
    }

    let amount = (count as i128)
        .checked_mul(balance)
        .ok_or(VaultError::ArithmeticOverflow)?
        / supply as i128;

    if amount <= 0 {
        return Err(VaultError::ZeroAmount);
    }
    // Only reachable with a stale snapshot count above the live supply.
    if amount > balance {
        return Err(VaultError::InsufficientBalance);
    }

    Ok(amount)
}
