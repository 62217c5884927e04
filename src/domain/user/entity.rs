//! User entity and related types

use serde::{Deserialize, Serialize};

use super::credit::micros_to_credit;
use super::validation::{validate_username, UserValidationError};
use crate::domain::storage::StorageEntity;
use crate::domain::DomainError;

/// User identifier - the username, immutable once registered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_username(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marketplace user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Username, unique across the store
    id: UserId,
    email: String,
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_date: Option<String>,
    /// Balance in micro-units, never negative
    credit_micros: i64,
}

impl User {
    /// Create a user with a zero balance
    pub fn new(id: UserId, email: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            address: address.into(),
            birth_date: None,
            credit_micros: 0,
        }
    }

    /// Set birth date (builder pattern)
    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    /// Set the opening balance (builder pattern)
    pub fn with_credit_micros(mut self, credit_micros: i64) -> Self {
        self.credit_micros = credit_micros.max(0);
        self
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    pub fn credit_micros(&self) -> i64 {
        self.credit_micros
    }

    pub fn credit(&self) -> f64 {
        micros_to_credit(self.credit_micros)
    }

    // Mutators

    /// Add a non-negative amount to the balance
    pub fn add_credit(&mut self, amount_micros: i64) -> Result<(), DomainError> {
        if amount_micros < 0 {
            return Err(DomainError::invalid_range(
                "Credit amount must not be negative",
            ));
        }

        self.credit_micros = self
            .credit_micros
            .checked_add(amount_micros)
            .ok_or_else(|| DomainError::invalid_range("Credit balance would overflow"))?;

        Ok(())
    }
}

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MICROS_PER_CREDIT;

    fn user(name: &str) -> User {
        User::new(UserId::new(name).unwrap(), "u@example.com", "Tehran")
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("user1").unwrap();
        assert_eq!(id.as_str(), "user1");
        assert_eq!(id.to_string(), "user1");
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("two words").is_err());
    }

    #[test]
    fn test_new_user_has_zero_credit() {
        let user = user("user1");
        assert_eq!(user.credit_micros(), 0);
        assert_eq!(user.credit(), 0.0);
        assert!(user.birth_date().is_none());
    }

    #[test]
    fn test_add_credit() {
        let mut user = user("user1").with_credit_micros(10 * MICROS_PER_CREDIT);

        user.add_credit(20 * MICROS_PER_CREDIT).unwrap();
        assert_eq!(user.credit(), 30.0);
    }

    #[test]
    fn test_add_negative_credit_rejected() {
        let mut user = user("user1").with_credit_micros(10 * MICROS_PER_CREDIT);

        let result = user.add_credit(-1);
        assert!(matches!(result, Err(DomainError::InvalidRange { .. })));
        assert_eq!(user.credit(), 10.0);
    }

    #[test]
    fn test_add_credit_overflow_rejected() {
        let mut user = user("user1").with_credit_micros(i64::MAX);
        assert!(user.add_credit(1).is_err());
        assert_eq!(user.credit_micros(), i64::MAX);
    }

    #[test]
    fn test_opening_balance_is_clamped() {
        let user = user("user1").with_credit_micros(-50);
        assert_eq!(user.credit_micros(), 0);
    }

    #[test]
    fn test_user_id_deserialization_validates() {
        let ok: Result<UserId, _> = serde_json::from_str("\"user1\"");
        assert!(ok.is_ok());

        let bad: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
