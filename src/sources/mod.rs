pub mod feed;
pub mod sample;
pub mod traits;

pub use feed::JsonFeedSource;
pub use sample::SampleSource;
pub use traits::ListingSource;
