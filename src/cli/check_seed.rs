//! Check-seed command - parses a seed file and loads it into a scratch store

use std::path::Path;

use crate::infrastructure::seed::{SeedData, SeedSummary};
use crate::infrastructure::services::MarketplaceService;
use crate::infrastructure::storage::StorageFactory;

/// Parse `path`, apply it to an empty in-memory store and print the counts.
///
/// Applying catches duplicate ids and comments that reference missing
/// records, which parsing alone would not.
pub async fn run(path: &Path) -> anyhow::Result<()> {
    let summary = check(path).await?;
    println!("{}: {}", path.display(), summary);
    Ok(())
}

async fn check(path: &Path) -> anyhow::Result<SeedSummary> {
    let seed = SeedData::load(path)?;
    let service = MarketplaceService::new(StorageFactory::in_memory_entity_store());

    Ok(seed.apply(&service).await?)
}
