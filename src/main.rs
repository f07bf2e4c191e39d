use std::env;
use std::path::Path;

use listing_scout::search::filter;
use listing_scout::{JsonFeedSource, ListingSource, QueryParser, SampleSource};
use tracing::{info, Level};
use tracing_subscriber;

const FEED_PATH: &str = "listings.json";
const DEMO_QUERY: &str = "3 bedroom house with pool in Los Angeles under 500k";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Scout - Natural Language Property Search");
    info!("===================================================");
    info!("");

    // Query comes from the command line, joined into one string
    let args: Vec<String> = env::args().skip(1).collect();
    let query = if args.is_empty() {
        info!("No query given, running the demo query");
        DEMO_QUERY.to_string()
    } else {
        args.join(" ")
    };

    info!("Query: \"{}\"", query);
    info!("");

    let parser = QueryParser::new();
    let criteria = parser.parse(&query);
    info!(
        "Parsed {} with confidence {}",
        if criteria.has_filters() {
            "criteria"
        } else {
            "no criteria"
        },
        criteria.confidence_score
    );

    // Use a feed file when one is present, bundled samples otherwise
    let source: Box<dyn ListingSource> = if Path::new(FEED_PATH).exists() {
        Box::new(JsonFeedSource::new(FEED_PATH))
    } else {
        Box::new(SampleSource::new())
    };

    let listings = source.fetch().await?;
    let results = filter::apply(&listings, &criteria);

    info!(
        "\n✅ {} of {} listings match ({})\n",
        results.len(),
        listings.len(),
        source.source_name()
    );

    for (i, listing) in results.iter().enumerate() {
        let price = listing
            .price
            .map(|p| format!("${:.0}", p))
            .unwrap_or_else(|| "price n/a".to_string());
        println!("{}. {} ({})", i + 1, listing.address, price);
        println!("   {}, {} {}", listing.city, listing.state, listing.zip);
        if let (Some(beds), Some(baths)) = (listing.beds, listing.baths) {
            println!("   {} bed, {} bath", beds, baths);
        }
        if let Some(square_feet) = listing.square_feet {
            println!("   {} sqft", square_feet);
        }
        if let Some(mls_number) = &listing.mls_number {
            println!("   MLS: {}", mls_number);
        }
        println!();
    }

    // Save the parsed criteria and the matching listings
    let criteria_json = serde_json::to_string_pretty(&criteria)?;
    tokio::fs::write("parsed_criteria.json", criteria_json).await?;
    info!("💾 Saved parsed criteria to parsed_criteria.json");

    let matched: Vec<_> = results.into_iter().cloned().collect();
    let results_json = serde_json::to_string_pretty(&matched)?;
    tokio::fs::write("search_results.json", results_json).await?;
    info!("💾 Saved {} matching listings to search_results.json", matched.len());

    Ok(())
}
