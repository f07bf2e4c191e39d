use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::models::Listing;
use crate::sources::traits::ListingSource;

/// Built-in California demo listings, used when no feed file is around
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingSource for SampleSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        info!("📋 Using bundled sample listings");

        let listings = vec![
            Listing {
                id: 101,
                mls_number: Some("LS24-0101".to_string()),
                status: Some("Active".to_string()),
                address: "2847 Mariposa Ave".to_string(),
                city: "Los Angeles".to_string(),
                state: "CA".to_string(),
                zip: "90026".to_string(),
                property_class: Some("Residential".to_string()),
                household_type: Some("Single Family House".to_string()),
                price: Some(485_000.0),
                beds: Some(3),
                baths: Some(2),
                square_feet: Some(1450),
                year_built: Some(1962),
                pool_private: Some(true),
                fireplace: None,
                view: None,
                garage: Some(true),
                remarks: Some("Updated mid-century home with a private pool and mature citrus trees.".to_string()),
                photos: vec!["https://photos.example-mls.com/LS24-0101/01.jpg".to_string()],
                latitude: Some(34.0766),
                longitude: Some(-118.2646),
                listed_at: Some(Utc::now()),
            },
            Listing {
                id: 102,
                mls_number: Some("LS24-0102".to_string()),
                status: Some("Active".to_string()),
                address: "1200 Union St Apt 304".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip: "94109".to_string(),
                property_class: Some("Residential".to_string()),
                household_type: Some("Condominium".to_string()),
                price: Some(899_000.0),
                beds: Some(2),
                baths: Some(2),
                square_feet: Some(1100),
                year_built: Some(1978),
                pool_private: None,
                fireplace: Some(true),
                view: Some(true),
                garage: None,
                remarks: Some("Top-floor Russian Hill condo with bay views from the living room.".to_string()),
                photos: vec![
                    "https://photos.example-mls.com/LS24-0102/01.jpg".to_string(),
                    "https://photos.example-mls.com/LS24-0102/02.jpg".to_string(),
                ],
                latitude: Some(37.7989),
                longitude: Some(-122.4203),
                listed_at: Some(Utc::now()),
            },
            Listing {
                id: 103,
                mls_number: Some("LS24-0103".to_string()),
                status: Some("Active".to_string()),
                address: "4521 Cape May Ave".to_string(),
                city: "San Diego".to_string(),
                state: "CA".to_string(),
                zip: "92107".to_string(),
                property_class: Some("Residential".to_string()),
                household_type: Some("Single Family House".to_string()),
                price: Some(529_000.0),
                beds: Some(3),
                baths: Some(2),
                square_feet: Some(1600),
                year_built: Some(1985),
                pool_private: None,
                fireplace: Some(true),
                view: None,
                garage: Some(true),
                remarks: Some("Ocean Beach bungalow a few blocks from the pier, two-car garage.".to_string()),
                photos: vec!["https://photos.example-mls.com/LS24-0103/01.jpg".to_string()],
                latitude: Some(32.7448),
                longitude: Some(-117.2494),
                listed_at: Some(Utc::now()),
            },
            Listing {
                id: 104,
                mls_number: Some("LS24-0104".to_string()),
                status: Some("Pending".to_string()),
                address: "880 J St Unit 907".to_string(),
                city: "San Diego".to_string(),
                state: "CA".to_string(),
                zip: "92101".to_string(),
                property_class: Some("Residential".to_string()),
                household_type: Some("Condominium".to_string()),
                price: Some(449_000.0),
                beds: Some(2),
                baths: Some(1),
                square_feet: Some(950),
                year_built: Some(2005),
                pool_private: None,
                fireplace: None,
                view: Some(true),
                garage: Some(true),
                remarks: Some("Downtown high-rise unit with skyline views and deeded parking.".to_string()),
                photos: vec![],
                latitude: Some(32.7097),
                longitude: Some(-117.1573),
                listed_at: Some(Utc::now()),
            },
            Listing {
                id: 105,
                mls_number: Some("LS24-0105".to_string()),
                status: Some("Active".to_string()),
                address: "3315 Freeport Blvd".to_string(),
                city: "Sacramento".to_string(),
                state: "CA".to_string(),
                zip: "95818".to_string(),
                property_class: Some("Residential".to_string()),
                household_type: Some("Single Family House".to_string()),
                price: Some(389_000.0),
                beds: Some(4),
                baths: Some(2),
                square_feet: Some(1800),
                year_built: Some(1948),
                pool_private: None,
                fireplace: Some(true),
                view: None,
                garage: None,
                remarks: Some("Land Park craftsman with original built-ins and a brick fireplace.".to_string()),
                photos: vec!["https://photos.example-mls.com/LS24-0105/01.jpg".to_string()],
                latitude: Some(38.5530),
                longitude: Some(-121.4932),
                listed_at: Some(Utc::now()),
            },
            Listing {
                id: 106,
                mls_number: Some("LS24-0106".to_string()),
                status: Some("Active".to_string()),
                address: "21654 Pacific Coast Hwy".to_string(),
                city: "Malibu".to_string(),
                state: "CA".to_string(),
                zip: "90265".to_string(),
                property_class: Some("Residential".to_string()),
                household_type: Some("Single Family House".to_string()),
                price: Some(4_850_000.0),
                beds: Some(5),
                baths: Some(4),
                square_feet: Some(4200),
                year_built: Some(1991),
                pool_private: Some(true),
                fireplace: Some(true),
                view: Some(true),
                garage: Some(true),
                remarks: Some("Bluff-top contemporary with an infinity pool and whitewater views.".to_string()),
                photos: vec![
                    "https://photos.example-mls.com/LS24-0106/01.jpg".to_string(),
                    "https://photos.example-mls.com/LS24-0106/02.jpg".to_string(),
                ],
                latitude: Some(34.0370),
                longitude: Some(-118.6607),
                listed_at: Some(Utc::now()),
            },
        ];

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "sample data"
    }
}
