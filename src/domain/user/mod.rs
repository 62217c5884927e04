//! User domain
//!
//! Users are registered externally and seeded into the store. Within this
//! service they are looked up, referenced by comments and ratings, and have
//! their credit balance topped up.

mod credit;
mod entity;
mod validation;

pub use credit::{credit_to_micros, micros_to_credit, parse_credit_amount, MICROS_PER_CREDIT};
pub use entity::{User, UserId};
pub use validation::{validate_username, UserValidationError};
