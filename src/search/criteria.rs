use serde::{Deserialize, Serialize};

/// Structured search criteria extracted from one natural-language query.
///
/// Every filter field starts absent and is only set when the corresponding
/// pattern matched the query text, so a blank record means "no filters".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    /// Price bounds in absolute dollars ("500k" is stored as 500000.0)
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Exact bedroom count; never set together with `min_beds`
    pub beds: Option<i32>,
    pub min_beds: Option<i32>,
    /// Exact bathroom count; never set together with `min_baths`
    pub baths: Option<i32>,
    pub min_baths: Option<i32>,
    pub min_square_feet: Option<i32>,
    pub max_square_feet: Option<i32>,
    pub pool_private: Option<bool>,
    pub fireplace: Option<bool>,
    pub view: Option<bool>,
    pub garage: Option<bool>,
    /// Canonical vocabulary token, e.g. "house" or "single family"
    pub property_type: Option<String>,
    pub min_year_built: Option<i32>,
    pub max_year_built: Option<i32>,
    /// The query text exactly as received, untrimmed
    pub original_query: String,
    /// 0-100; 15 points per matched criteria group, capped at 100
    pub confidence_score: u8,
}

impl SearchCriteria {
    /// Empty criteria carrying only the verbatim query text
    pub fn for_query(query: &str) -> Self {
        Self {
            original_query: query.to_string(),
            ..Self::default()
        }
    }

    /// True when at least one filterable field is populated. Blank strings and
    /// explicit `false` feature flags constrain nothing and do not count.
    pub fn has_filters(&self) -> bool {
        let non_blank = |field: &Option<String>| {
            field
                .as_deref()
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false)
        };

        non_blank(&self.city)
            || non_blank(&self.state)
            || non_blank(&self.zip)
            || non_blank(&self.property_type)
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.beds.is_some()
            || self.min_beds.is_some()
            || self.baths.is_some()
            || self.min_baths.is_some()
            || self.min_square_feet.is_some()
            || self.max_square_feet.is_some()
            || self.pool_private == Some(true)
            || self.fireplace == Some(true)
            || self.view == Some(true)
            || self.garage == Some(true)
            || self.min_year_built.is_some()
            || self.max_year_built.is_some()
    }
}
