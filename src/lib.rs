//! Natural-language property search.
//!
//! Turns free-text queries like "3 bedroom house with pool in Los Angeles
//! under 500k" into structured [`SearchCriteria`] with a confidence score,
//! and matches the result against listing feeds.

pub mod models;
pub mod search;
pub mod sources;

pub use models::Listing;
pub use search::{parse_query, QueryParser, SearchCriteria};
pub use sources::{JsonFeedSource, ListingSource, SampleSource};
