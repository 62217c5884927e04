//! Commodity endpoints: catalog, search, ratings, comments and suggestions

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::api::comments::CommentResponse;
use crate::api::state::AppState;
use crate::api::types::{string_or_number, ApiError, Json};
use crate::domain::{Commodity, SearchOption};

pub const RATE_ADDED: &str = "rate added successfully!";
pub const COMMENT_ADDED: &str = "comment added successfully!";

/// Request to rate a commodity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RateRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(deserialize_with = "string_or_number")]
    pub rate: String,
}

/// Request to comment on a commodity
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub comment: String,
}

/// Request to search the catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_option: SearchOption,
    pub search_value: String,
}

/// Commodity response with its rating aggregate
#[derive(Debug, Clone, Serialize)]
pub struct CommodityResponse {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub rating_count: usize,
}

impl From<&Commodity> for CommodityResponse {
    fn from(commodity: &Commodity) -> Self {
        Self {
            id: commodity.id().to_string(),
            name: commodity.name().to_string(),
            provider: commodity.provider().to_string(),
            category: commodity.category().to_string(),
            price: commodity.price(),
            rating: commodity.average_rating(),
            rating_count: commodity.ratings().len(),
        }
    }
}

fn to_responses(commodities: &[Commodity]) -> Vec<CommodityResponse> {
    commodities.iter().map(CommodityResponse::from).collect()
}

/// GET /commodities
pub async fn list_commodities(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommodityResponse>>, ApiError> {
    debug!("Listing commodities");

    let commodities = state.marketplace.list_commodities().await?;
    Ok(Json(to_responses(&commodities)))
}

/// GET /commodities/{id}
pub async fn get_commodity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CommodityResponse>, ApiError> {
    debug!(commodity_id = %id, "Getting commodity");

    let commodity = state.marketplace.get_commodity(&id).await?;
    Ok(Json(CommodityResponse::from(&commodity)))
}

/// POST /commodities/{id}/rate
pub async fn rate_commodity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RateRequest>,
) -> Result<&'static str, ApiError> {
    debug!(commodity_id = %id, username = %request.username, rate = %request.rate, "Rating commodity");
    request.validate()?;

    state
        .marketplace
        .rate(&id, &request.username, &request.rate)
        .await?;

    Ok(RATE_ADDED)
}

/// POST /commodities/{id}/comment
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> Result<&'static str, ApiError> {
    debug!(commodity_id = %id, username = %request.username, "Adding comment");
    request.validate()?;

    state
        .marketplace
        .add_comment(&id, &request.username, &request.comment)
        .await?;

    Ok(COMMENT_ADDED)
}

/// GET /commodities/{id}/comment
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    debug!(commodity_id = %id, "Listing comments");

    let comments = state.marketplace.list_comments(&id).await?;
    Ok(Json(comments.iter().map(CommentResponse::from).collect()))
}

/// POST /commodities/search
pub async fn search_commodities(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<CommodityResponse>>, ApiError> {
    debug!(option = %request.search_option, value = %request.search_value, "Searching commodities");

    let commodities = state
        .marketplace
        .search(request.search_option, &request.search_value)
        .await?;

    Ok(Json(to_responses(&commodities)))
}

/// GET /commodities/{id}/suggested
pub async fn suggested_commodities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommodityResponse>>, ApiError> {
    debug!(commodity_id = %id, "Suggesting commodities");

    let commodities = state.marketplace.suggest(&id).await?;
    Ok(Json(to_responses(&commodities)))
}
