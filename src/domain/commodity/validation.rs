//! Commodity validation

use thiserror::Error;

use crate::domain::DomainError;

/// Lowest accepted rating score
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating score
pub const MAX_RATING: u8 = 5;

/// Errors that can occur during commodity validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommodityValidationError {
    #[error("Commodity ID cannot be empty")]
    EmptyId,

    #[error("Commodity ID cannot contain whitespace")]
    WhitespaceInId,

    #[error("Commodity name cannot be empty")]
    EmptyName,

    #[error("Commodity price must be a finite, non-negative number")]
    InvalidPrice,
}

/// Validate a commodity ID
pub fn validate_commodity_id(id: &str) -> Result<(), CommodityValidationError> {
    if id.is_empty() {
        return Err(CommodityValidationError::EmptyId);
    }

    if id.chars().any(char::is_whitespace) {
        return Err(CommodityValidationError::WhitespaceInId);
    }

    Ok(())
}

/// Validate a commodity name
pub fn validate_commodity_name(name: &str) -> Result<(), CommodityValidationError> {
    if name.trim().is_empty() {
        return Err(CommodityValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a commodity price
pub fn validate_price(price: f64) -> Result<(), CommodityValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CommodityValidationError::InvalidPrice);
    }

    Ok(())
}

/// Parse a raw rating string into a score.
///
/// Non-integer input fails with `InvalidFormat`; an integer outside
/// `MIN_RATING..=MAX_RATING` fails with `InvalidRating`.
pub fn parse_rating(raw: &str) -> Result<u8, DomainError> {
    let score: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_format(format!("'{}' is not a valid rating", raw)))?;

    check_rating(score)
}

/// Check an integer score against the accepted rating range
pub(crate) fn check_rating(score: i64) -> Result<u8, DomainError> {
    if score < i64::from(MIN_RATING) || score > i64::from(MAX_RATING) {
        return Err(DomainError::invalid_rating(score));
    }

    Ok(score as u8)
}
