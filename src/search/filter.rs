use crate::models::Listing;
use crate::search::criteria::SearchCriteria;

/// Check one listing against parsed criteria.
///
/// Absent criteria fields constrain nothing. A listing with no value on a
/// constrained dimension (no price when a price bound is set, and so on) is
/// excluded rather than given the benefit of the doubt.
pub fn matches(listing: &Listing, criteria: &SearchCriteria) -> bool {
    matches_location(listing, criteria)
        && matches_price(listing, criteria)
        && matches_rooms(listing, criteria)
        && matches_size(listing, criteria)
        && matches_features(listing, criteria)
        && matches_property_type(listing, criteria)
        && matches_year_built(listing, criteria)
}

/// Filter a listing slice against criteria, keeping input order.
/// Criteria with no filters pass everything through.
pub fn apply<'a>(listings: &'a [Listing], criteria: &SearchCriteria) -> Vec<&'a Listing> {
    if !criteria.has_filters() {
        return listings.iter().collect();
    }
    listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

fn matches_location(listing: &Listing, criteria: &SearchCriteria) -> bool {
    if let Some(city) = non_blank(&criteria.city) {
        if !listing.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }
    if let Some(state) = non_blank(&criteria.state) {
        if !listing.state.eq_ignore_ascii_case(state) {
            return false;
        }
    }
    if let Some(zip) = non_blank(&criteria.zip) {
        if listing.zip != zip {
            return false;
        }
    }
    true
}

fn matches_price(listing: &Listing, criteria: &SearchCriteria) -> bool {
    meets_min(listing.price, criteria.min_price) && meets_max(listing.price, criteria.max_price)
}

fn matches_rooms(listing: &Listing, criteria: &SearchCriteria) -> bool {
    // Exact counts take precedence over lower bounds; the parser never sets both
    let beds_ok = match criteria.beds {
        Some(beds) => listing.beds == Some(beds),
        None => meets_min(listing.beds, criteria.min_beds),
    };
    let baths_ok = match criteria.baths {
        Some(baths) => listing.baths == Some(baths),
        None => meets_min(listing.baths, criteria.min_baths),
    };
    beds_ok && baths_ok
}

fn matches_size(listing: &Listing, criteria: &SearchCriteria) -> bool {
    meets_min(listing.square_feet, criteria.min_square_feet)
        && meets_max(listing.square_feet, criteria.max_square_feet)
}

fn matches_features(listing: &Listing, criteria: &SearchCriteria) -> bool {
    has_flag(listing.pool_private, criteria.pool_private)
        && has_flag(listing.fireplace, criteria.fireplace)
        && has_flag(listing.view, criteria.view)
        && has_flag(listing.garage, criteria.garage)
}

/// The requested type must appear as a substring of either feed label, so
/// "house" matches a "Single Family House" household type and "condo"
/// matches a "Condominium" one.
fn matches_property_type(listing: &Listing, criteria: &SearchCriteria) -> bool {
    let wanted = match non_blank(&criteria.property_type) {
        Some(wanted) => wanted.to_lowercase(),
        None => return true,
    };
    let label_contains = |label: &Option<String>| {
        label
            .as_ref()
            .map(|text| text.to_lowercase().contains(&wanted))
            .unwrap_or(false)
    };
    label_contains(&listing.household_type) || label_contains(&listing.property_class)
}

fn matches_year_built(listing: &Listing, criteria: &SearchCriteria) -> bool {
    meets_min(listing.year_built, criteria.min_year_built)
        && meets_max(listing.year_built, criteria.max_year_built)
}

/// Blank criteria strings behave as if the field were absent
fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

fn meets_min<T: PartialOrd>(value: Option<T>, bound: Option<T>) -> bool {
    match bound {
        Some(min) => matches!(value, Some(v) if v >= min),
        None => true,
    }
}

fn meets_max<T: PartialOrd>(value: Option<T>, bound: Option<T>) -> bool {
    match bound {
        Some(max) => matches!(value, Some(v) if v <= max),
        None => true,
    }
}

/// A requested feature only passes listings that explicitly advertise it
fn has_flag(listing_flag: Option<bool>, wanted: Option<bool>) -> bool {
    match wanted {
        Some(true) => listing_flag == Some(true),
        _ => true,
    }
}
