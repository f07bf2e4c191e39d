use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// This allows swapping the bundled samples for a live MLS feed in the future
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch listings from the source
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
