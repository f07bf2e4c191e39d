//! Compiled pattern tables and vocabularies for the query parser.
//!
//! Everything here is static: the regexes and word lists are built once on
//! first use and shared for the life of the process via `patterns()`.

use std::sync::OnceLock;

use regex::Regex;

/// City names the location matcher recognizes, tried in this order. The
/// first alternative wins: "Newport Beach" is listed before "Newport" so
/// the longer name matches, while "Chino" shadows "Chino Hills".
pub const CITY_NAMES: &[&str] = &[
    "Los Angeles",
    "LA",
    "San Francisco",
    "SF",
    "San Diego",
    "Sacramento",
    "San Jose",
    "Oakland",
    "Fresno",
    "Long Beach",
    "Santa Ana",
    "Anaheim",
    "Bakersfield",
    "Riverside",
    "Stockton",
    "Irvine",
    "Fremont",
    "San Bernardino",
    "Modesto",
    "Fontana",
    "Oxnard",
    "Moreno Valley",
    "Huntington Beach",
    "Glendale",
    "Santa Clarita",
    "Oceanside",
    "Garden Grove",
    "Elk Grove",
    "Corona",
    "Ontario",
    "Rancho Cucamonga",
    "Santa Rosa",
    "Pasadena",
    "Hayward",
    "Salinas",
    "Sunnyvale",
    "Roseville",
    "Escondido",
    "Pomona",
    "Torrance",
    "Fullerton",
    "Orange",
    "Visalia",
    "Thousand Oaks",
    "Simi Valley",
    "Concord",
    "Santa Clara",
    "Victorville",
    "Berkeley",
    "Vallejo",
    "Fairfield",
    "Murrieta",
    "Richmond",
    "Lancaster",
    "Palmdale",
    "Carlsbad",
    "Antioch",
    "Temecula",
    "Downey",
    "Inglewood",
    "Ventura",
    "West Covina",
    "Norwalk",
    "Burbank",
    "Daly City",
    "Rialto",
    "San Mateo",
    "Vista",
    "Vacaville",
    "Carson",
    "Hesperia",
    "Redding",
    "Santa Monica",
    "Westminster",
    "Santa Barbara",
    "Chico",
    "Newport Beach",
    "San Marcos",
    "Hawthorne",
    "Citrus Heights",
    "Alhambra",
    "Tracy",
    "Livermore",
    "Buena Park",
    "Menifee",
    "Hemet",
    "Lakewood",
    "Merced",
    "Chino",
    "Chino Hills",
    "Indio",
    "Redwood City",
    "Lake Forest",
    "Napa",
    "Tustin",
    "Bellflower",
    "Mountain View",
    "Redondo Beach",
    "Alameda",
    "Upland",
    "Folsom",
    "San Ramon",
    "Pleasanton",
    "Lynwood",
    "Union City",
    "Apple Valley",
    "Manteca",
    "Redlands",
    "Turlock",
    "Milpitas",
    "Whittier",
    "Davis",
    "Newport",
    "Palo Alto",
    "Malibu",
];

/// Abbreviations expanded to their canonical gazetteer entry
const CITY_ABBREVIATIONS: &[(&str, &str)] = &[("LA", "Los Angeles"), ("SF", "San Francisco")];

/// Canonical property-type vocabulary; matches are stored as these tokens
pub const PROPERTY_TYPE_VOCAB: &[&str] = &[
    "house",
    "condo",
    "townhouse",
    "apartment",
    "single family",
    "multi family",
    "land",
    "commercial",
];

// Unit tokens that claim a number for another dimension. A price candidate
// whose amount is followed by one of these as a whole word (allowing a
// fractional tail, as in "1.5 baths") is not a price (see parser).
const UNIT_GUARD: &str = r"sq\s*ft|sqft|square\s*feet|bed(?:room)?s?|br|bd|bath(?:room)?s?|ba";

/// The full compiled pattern set used by `QueryParser`
pub struct SearchPatterns {
    pub city: Regex,
    pub price_range: Regex,
    pub max_price: Regex,
    pub min_price: Regex,
    pub bedrooms: Regex,
    pub min_bedrooms: Regex,
    pub bathrooms: Regex,
    pub min_bathrooms: Regex,
    pub sqft_range: Regex,
    pub min_sqft: Regex,
    pub max_sqft: Regex,
    pub pool: Regex,
    pub fireplace: Regex,
    pub view: Regex,
    pub garage: Regex,
    pub property_type: Regex,
    pub year_range: Regex,
    pub min_year: Regex,
    pub max_year: Regex,
}

impl SearchPatterns {
    fn new() -> Self {
        Self {
            // Cities count only when preceded by a location preposition
            city: Regex::new(&format!(
                r"(?i)\b(?:in|near|around|at)\s+({})\b",
                CITY_NAMES.join("|")
            ))
            .unwrap(),
            // Price range: the `built` prefix and trailing unit token are captured
            // so the parser can reject year-built and sqft/bed/bath readings
            price_range: Regex::new(&format!(
                r"(?i)(?P<built>built\s+)?(?:between\s+)?\$?(?P<lo>[0-9,]+k?)\s*(?:to|-|and)\s*\$?(?P<hi>[0-9,]+k?)(?P<unit>(?:\.[0-9]+)?\s*(?:{UNIT_GUARD})\b)?"
            ))
            .unwrap(),
            max_price: Regex::new(&format!(
                r"(?i)(?:under|below|less than|max|maximum|up to)\s+\$?(?P<amount>[0-9,]+k?)(?P<unit>(?:\.[0-9]+)?\s*(?:{UNIT_GUARD})\b)?"
            ))
            .unwrap(),
            min_price: Regex::new(&format!(
                r"(?i)(?:over|above|more than|min|minimum|starting at|at least)\s+\$?(?P<amount>[0-9,]+k?)(?P<unit>(?:\.[0-9]+)?\s*(?:{UNIT_GUARD})\b)?"
            ))
            .unwrap(),
            bedrooms: Regex::new(r"(?i)([0-9]+)\s*\+?\s*(?:bed(?:room)?s?|br|bd)").unwrap(),
            min_bedrooms: Regex::new(
                r"(?i)(?:at least|minimum|min|\+)\s*([0-9]+)\s*(?:bed(?:room)?s?|br|bd)",
            )
            .unwrap(),
            bathrooms: Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*\+?\s*(?:bath(?:room)?s?|ba)")
                .unwrap(),
            min_bathrooms: Regex::new(
                r"(?i)(?:at least|minimum|min|\+)\s*([0-9]+(?:\.[0-9]+)?)\s*(?:bath(?:room)?s?|ba)",
            )
            .unwrap(),
            sqft_range: Regex::new(
                r"(?i)([0-9,]+)\s*(?:to|-|and)\s*([0-9,]+)\s*(?:sq\s*ft|sqft|square\s*feet)",
            )
            .unwrap(),
            min_sqft: Regex::new(
                r"(?i)(?:over|above|more than|at least)\s+([0-9,]+)\s*(?:sq\s*ft|sqft|square\s*feet)",
            )
            .unwrap(),
            max_sqft: Regex::new(
                r"(?i)(?:under|below|less than|max|maximum|up to)\s+([0-9,]+)\s*(?:sq\s*ft|sqft|square\s*feet)",
            )
            .unwrap(),
            pool: Regex::new(r"(?i)\b(?:with|has|having|includes?)\s+(?:a\s+)?pool\b").unwrap(),
            fireplace: Regex::new(r"(?i)\b(?:with|has|having|includes?)\s+(?:a\s+)?fireplace\b")
                .unwrap(),
            view: Regex::new(
                r"(?i)\b(?:with|has|having|includes?)\s+(?:a\s+)?(?:view|ocean view|mountain view|city view)\b",
            )
            .unwrap(),
            garage: Regex::new(r"(?i)\b(?:with|has|having|includes?)\s+(?:a\s+)?garage\b").unwrap(),
            property_type: Regex::new(
                r"(?i)\b(houses?|condos?|townhouses?|apartments?|single\s+family|multi\s+family|land|commercial)\b",
            )
            .unwrap(),
            year_range: Regex::new(r"(?i)built\s+(?:between\s+)?([0-9]{4})\s*(?:to|-|and)\s*([0-9]{4})")
                .unwrap(),
            min_year: Regex::new(r"(?i)built\s+(?:after|since|from)\s+([0-9]{4})").unwrap(),
            max_year: Regex::new(r"(?i)built\s+(?:before|prior to|until)\s+([0-9]{4})").unwrap(),
        }
    }
}

/// Shared compiled pattern set, built on first use
pub fn patterns() -> &'static SearchPatterns {
    static PATTERNS: OnceLock<SearchPatterns> = OnceLock::new();
    PATTERNS.get_or_init(SearchPatterns::new)
}

/// Expand a recognized abbreviation to its canonical city name; anything else
/// is kept as it appeared in the query
pub fn normalize_city(raw: &str) -> String {
    for (abbreviation, full) in CITY_ABBREVIATIONS {
        if raw.eq_ignore_ascii_case(abbreviation) {
            return (*full).to_string();
        }
    }
    raw.to_string()
}

/// Map a matched property-type surface form ("Houses", "single  family") back
/// to its vocabulary token
pub fn canonical_property_type(raw: &str) -> String {
    let folded = raw
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    for token in PROPERTY_TYPE_VOCAB {
        if folded == *token || folded == format!("{token}s") {
            return (*token).to_string();
        }
    }
    folded
}
