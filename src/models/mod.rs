use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a listings feed, the record the criteria filter runs against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub mls_number: Option<String>,
    pub status: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Listing class label from the feed (e.g. "Residential")
    pub property_class: Option<String>,
    /// Household type label from the feed (e.g. "Single Family House")
    pub household_type: Option<String>,
    pub price: Option<f64>,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub square_feet: Option<i32>,
    pub year_built: Option<i32>,
    pub pool_private: Option<bool>,
    pub fireplace: Option<bool>,
    pub view: Option<bool>,
    pub garage: Option<bool>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub listed_at: Option<DateTime<Utc>>,
}
