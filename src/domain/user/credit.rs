//! Credit amounts
//!
//! Balances are kept in integer micro-units so that repeated top-ups stay
//! exact. Amounts arrive as raw strings from the request layer.

use crate::domain::DomainError;

/// Number of micro-units in one unit of credit
pub const MICROS_PER_CREDIT: i64 = 1_000_000;

/// Largest amount accepted in a single credit adjustment
const MAX_CREDIT_AMOUNT: f64 = 1_000_000_000_000.0;

/// Parse a raw credit amount into micro-units.
///
/// Fails with `InvalidFormat` when the string is not a finite number and
/// with `InvalidRange` when it is negative or exceeds the single-adjustment
/// ceiling. Zero is accepted.
pub fn parse_credit_amount(raw: &str) -> Result<i64, DomainError> {
    let trimmed = raw.trim();

    let amount: f64 = trimmed.parse().map_err(|_| {
        DomainError::invalid_format(format!("'{}' is not a valid credit amount", raw))
    })?;

    credit_to_micros(amount).map_err(|e| match e {
        DomainError::InvalidFormat { .. } => {
            DomainError::invalid_format(format!("'{}' is not a valid credit amount", raw))
        }
        other => other,
    })
}

/// Convert an already-parsed credit amount into micro-units.
///
/// Applies the same checks as [`parse_credit_amount`] after parsing.
pub fn credit_to_micros(amount: f64) -> Result<i64, DomainError> {
    if !amount.is_finite() {
        return Err(DomainError::invalid_format("Credit amount must be a finite number"));
    }

    if amount < 0.0 {
        return Err(DomainError::invalid_range(format!(
            "Credit amount must not be negative, got {}",
            amount
        )));
    }

    if amount > MAX_CREDIT_AMOUNT {
        return Err(DomainError::invalid_range(format!(
            "Credit amount must not exceed {}",
            MAX_CREDIT_AMOUNT
        )));
    }

    Ok((amount * MICROS_PER_CREDIT as f64).round() as i64)
}

/// Convert micro-units back into a credit value
pub fn micros_to_credit(micros: i64) -> f64 {
    micros as f64 / MICROS_PER_CREDIT as f64
}
