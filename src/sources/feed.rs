use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::Listing;
use crate::sources::traits::ListingSource;

/// Listing source backed by a JSON feed file holding an array of listings
pub struct JsonFeedSource {
    path: PathBuf,
}

impl JsonFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFeedSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Reading listing feed from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listing feed {}", self.path.display()))?;

        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listing feed {}", self.path.display()))?;

        info!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON feed"
    }
}
