//! Commodity market API
//!
//! An in-memory marketplace backend:
//! - Commodity catalog with name, category and provider search
//! - Per-user ratings with averages computed on read
//! - Comments with like/dislike counts
//! - Content-based "similar commodities" suggestions
//! - User credit top-ups

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::seed::SeedData;
use infrastructure::services::MarketplaceService;
use infrastructure::storage::StorageFactory;

/// Build the marketplace service from configuration, seeding the store when
/// `catalog.seed_path` is set
pub async fn create_marketplace_service(config: &AppConfig) -> anyhow::Result<MarketplaceService> {
    let store = StorageFactory::in_memory_entity_store();
    let service =
        MarketplaceService::new(store).with_suggestion_limit(config.catalog.suggestion_limit);

    match &config.catalog.seed_path {
        Some(path) => {
            let summary = SeedData::load(path)?.apply(&service).await?;
            info!(path = %path.display(), %summary, "Loaded seed data");
        }
        None => info!("No seed path configured, starting with an empty store"),
    }

    let (users, commodities, comments) = service.store().counts().await?;
    info!(users, commodities, comments, "Entity store ready");

    Ok(service)
}

/// Create application state with all services
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let service = create_marketplace_service(config).await?;
    Ok(AppState::new(Arc::new(service)))
}
