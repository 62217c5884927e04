//! User endpoints

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{string_or_number, ApiError, Json};
use crate::domain::{DomainError, User};

pub const CREDIT_ADDED: &str = "credit added successfully!";
pub const INVALID_CREDIT_FORMAT: &str = "Please enter a valid number for the credit amount.";
pub const INVALID_CREDIT_RANGE: &str = "Credit amount must be a non-negative number.";

/// Request to add credit to a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRequest {
    #[serde(deserialize_with = "string_or_number")]
    pub credit: String,
}

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub credit: f64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.id().to_string(),
            email: user.email().to_string(),
            address: user.address().to_string(),
            birth_date: user.birth_date().map(String::from),
            credit: user.credit(),
        }
    }
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(username = %id, "Getting user");

    let user = state.marketplace.get_user(&id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// POST /users/{id}/credit
pub async fn add_credit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreditRequest>,
) -> Result<&'static str, ApiError> {
    debug!(username = %id, credit = %request.credit, "Adding credit");

    state
        .marketplace
        .adjust_credit(&id, &request.credit)
        .await
        .map_err(credit_error)?;

    Ok(CREDIT_ADDED)
}

fn credit_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidFormat { .. } => ApiError::bad_request(INVALID_CREDIT_FORMAT),
        err if err.is_out_of_range() => ApiError::bad_request(INVALID_CREDIT_RANGE),
        err => ApiError::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use crate::domain::UserId;

    #[test]
    fn test_credit_request_deserialization() {
        let request: CreditRequest = serde_json::from_str(r#"{"credit": "324dsfgd"}"#).unwrap();
        assert_eq!(request.credit, "324dsfgd");

        let request: CreditRequest = serde_json::from_str(r#"{"credit": 32}"#).unwrap();
        assert_eq!(request.credit, "32");
    }

    #[test]
    fn test_credit_error_messages() {
        let err = credit_error(DomainError::invalid_format("x"));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, INVALID_CREDIT_FORMAT);

        let err = credit_error(DomainError::invalid_range("x"));
        assert_eq!(err.message, INVALID_CREDIT_RANGE);

        let err = credit_error(DomainError::not_found("User 'u1' not found"));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "User 'u1' not found");
    }

    #[test]
    fn test_user_response_from() {
        let user = User::new(UserId::new("u1").unwrap(), "u1@example.com", "Tehran")
            .with_birth_date("1990-01-01")
            .with_credit_micros(2_500_000);

        let response = UserResponse::from(&user);
        assert_eq!(response.username, "u1");
        assert_eq!(response.credit, 2.5);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"birth_date\":\"1990-01-01\""));
    }
}
