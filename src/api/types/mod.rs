//! Shared request layer types

pub mod error;
pub mod json;
pub mod raw;

pub use error::{ApiError, ApiErrorType};
pub use json::Json;
pub use raw::string_or_number;
