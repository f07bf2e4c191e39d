use regex::Regex;
use tracing::debug;

use crate::search::criteria::SearchCriteria;
use crate::search::patterns::{canonical_property_type, normalize_city, patterns, SearchPatterns};

/// Rule-based parser that turns a free-text property query into structured
/// `SearchCriteria`.
///
/// Parsing is total: any input, including empty or nonsense text, produces a
/// criteria record. Unrecognized fragments are ignored and the confidence
/// score reflects how many criteria groups actually matched.
pub struct QueryParser {
    patterns: &'static SearchPatterns,
}

impl QueryParser {
    pub fn new() -> Self {
        Self {
            patterns: patterns(),
        }
    }

    /// Parse a natural-language query like
    /// "3 bedroom house with pool in Los Angeles under 500k".
    pub fn parse(&self, query: &str) -> SearchCriteria {
        let mut criteria = SearchCriteria::for_query(query);
        let text = query.trim();
        if text.is_empty() {
            return criteria;
        }

        let mut matched = 0usize;
        matched += self.extract_city(text, &mut criteria);
        matched += self.extract_price(text, &mut criteria);
        matched += self.extract_bedrooms(text, &mut criteria);
        matched += self.extract_bathrooms(text, &mut criteria);
        matched += self.extract_square_feet(text, &mut criteria);
        matched += self.extract_features(text, &mut criteria);
        matched += self.extract_property_type(text, &mut criteria);
        matched += self.extract_year_built(text, &mut criteria);

        criteria.confidence_score = (matched * 15).min(100) as u8;
        debug!(
            "Parsed query into {} criteria groups (confidence {})",
            matched, criteria.confidence_score
        );
        criteria
    }

    fn extract_city(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        if let Some(caps) = self.patterns.city.captures(text) {
            let city = normalize_city(&caps[1]);
            debug!("Matched city: {}", city);
            criteria.city = Some(city);
            1
        } else {
            0
        }
    }

    /// The range form wins the whole price dimension; independent bounds are
    /// only consulted when no range matched. Candidates that really belong to
    /// another dimension (a `built` year span, or an amount followed by a
    /// sqft/bed/bath unit) are rejected via their guard captures.
    fn extract_price(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        let range = self
            .patterns
            .price_range
            .captures_iter(text)
            .find(|caps| caps.name("built").is_none() && caps.name("unit").is_none());
        if let Some(caps) = range {
            criteria.min_price = parse_amount(&caps["lo"]);
            criteria.max_price = parse_amount(&caps["hi"]);
            return if criteria.min_price.is_some() || criteria.max_price.is_some() {
                1
            } else {
                0
            };
        }

        let mut matched = 0;
        if let Some(amount) = first_unguarded_amount(&self.patterns.max_price, text) {
            criteria.max_price = Some(amount);
            matched += 1;
        }
        if let Some(amount) = first_unguarded_amount(&self.patterns.min_price, text) {
            criteria.min_price = Some(amount);
            matched += 1;
        }
        matched
    }

    fn extract_bedrooms(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        if let Some(caps) = self.patterns.min_bedrooms.captures(text) {
            if let Some(count) = parse_count(&caps[1]) {
                criteria.min_beds = Some(count);
                return 1;
            }
            return 0;
        }
        if let Some(caps) = self.patterns.bedrooms.captures(text) {
            if let (Some(span), Some(count)) = (caps.get(0), parse_count(&caps[1])) {
                // A "+" near the number ("3+ beds") turns the exact count
                // into a lower bound
                if context_window(text, span.start(), span.end()).contains('+') {
                    criteria.min_beds = Some(count);
                } else {
                    criteria.beds = Some(count);
                }
                return 1;
            }
        }
        0
    }

    fn extract_bathrooms(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        if let Some(caps) = self.patterns.min_bathrooms.captures(text) {
            if let Some(count) = parse_bath_count(&caps[1]) {
                criteria.min_baths = Some(count);
                return 1;
            }
            return 0;
        }
        if let Some(caps) = self.patterns.bathrooms.captures(text) {
            if let (Some(span), Some(count)) = (caps.get(0), parse_bath_count(&caps[1])) {
                if context_window(text, span.start(), span.end()).contains('+') {
                    criteria.min_baths = Some(count);
                } else {
                    criteria.baths = Some(count);
                }
                return 1;
            }
        }
        0
    }

    fn extract_square_feet(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        if let Some(caps) = self.patterns.sqft_range.captures(text) {
            criteria.min_square_feet = parse_count(&caps[1]);
            criteria.max_square_feet = parse_count(&caps[2]);
            return if criteria.min_square_feet.is_some() || criteria.max_square_feet.is_some() {
                1
            } else {
                0
            };
        }

        let mut matched = 0;
        if let Some(value) = self
            .patterns
            .min_sqft
            .captures(text)
            .and_then(|caps| parse_count(&caps[1]))
        {
            criteria.min_square_feet = Some(value);
            matched += 1;
        }
        if let Some(value) = self
            .patterns
            .max_sqft
            .captures(text)
            .and_then(|caps| parse_count(&caps[1]))
        {
            criteria.max_square_feet = Some(value);
            matched += 1;
        }
        matched
    }

    /// Feature flags are only ever set to `true`, and only on an explicit
    /// "with/has a ..." phrasing; a bare feature word is left alone.
    fn extract_features(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        let mut matched = 0;
        if self.patterns.pool.is_match(text) {
            criteria.pool_private = Some(true);
            matched += 1;
        }
        if self.patterns.fireplace.is_match(text) {
            criteria.fireplace = Some(true);
            matched += 1;
        }
        if self.patterns.view.is_match(text) {
            criteria.view = Some(true);
            matched += 1;
        }
        if self.patterns.garage.is_match(text) {
            criteria.garage = Some(true);
            matched += 1;
        }
        matched
    }

    fn extract_property_type(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        if let Some(caps) = self.patterns.property_type.captures(text) {
            criteria.property_type = Some(canonical_property_type(&caps[1]));
            1
        } else {
            0
        }
    }

    fn extract_year_built(&self, text: &str, criteria: &mut SearchCriteria) -> usize {
        if let Some(caps) = self.patterns.year_range.captures(text) {
            criteria.min_year_built = parse_count(&caps[1]);
            criteria.max_year_built = parse_count(&caps[2]);
            return if criteria.min_year_built.is_some() || criteria.max_year_built.is_some() {
                1
            } else {
                0
            };
        }

        let mut matched = 0;
        if let Some(year) = self
            .patterns
            .min_year
            .captures(text)
            .and_then(|caps| parse_count(&caps[1]))
        {
            criteria.min_year_built = Some(year);
            matched += 1;
        }
        if let Some(year) = self
            .patterns
            .max_year
            .captures(text)
            .and_then(|caps| parse_count(&caps[1]))
        {
            criteria.max_year_built = Some(year);
            matched += 1;
        }
        matched
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience over `QueryParser`
pub fn parse_query(query: &str) -> SearchCriteria {
    QueryParser::new().parse(query)
}

/// First price match whose amount is not claimed by another dimension's unit
fn first_unguarded_amount(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures_iter(text)
        .find(|caps| caps.name("unit").is_none())
        .and_then(|caps| parse_amount(&caps["amount"]))
}

/// Normalize a price token to absolute dollars: commas are stripped, a
/// trailing `k` multiplies by 1000, and bare values under 10,000 are read as
/// thousands ("500" means $500,000).
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    if cleaned.ends_with('k') || cleaned.ends_with('K') {
        let digits = &cleaned[..cleaned.len() - 1];
        return digits.parse::<f64>().ok().map(|value| value * 1000.0);
    }
    let value = cleaned.parse::<f64>().ok()?;
    if value < 10_000.0 {
        Some(value * 1000.0)
    } else {
        Some(value)
    }
}

/// Comma-tolerant integer parse; `None` on anything that does not fit
fn parse_count(raw: &str) -> Option<i32> {
    raw.replace(',', "").parse().ok()
}

/// Bathroom counts may be fractional in the text ("2.5 baths"); round up.
/// Counts too large for the field are absent, like the other integer parses.
fn parse_bath_count(raw: &str) -> Option<i32> {
    let value = raw.parse::<f64>().ok()?.ceil();
    if value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}

/// Text surrounding a match (about 10 bytes before, 5 after), clamped to
/// character boundaries so slicing arbitrary UTF-8 cannot panic
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut lo = start.saturating_sub(10);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + 5).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> SearchCriteria {
        QueryParser::new().parse(query)
    }

    #[test]
    fn empty_input_yields_empty_criteria() {
        let criteria = parse("");
        assert_eq!(criteria.confidence_score, 0);
        assert!(!criteria.has_filters());
        assert_eq!(criteria.original_query, "");
    }

    #[test]
    fn whitespace_input_yields_empty_criteria() {
        let criteria = parse("   \t  ");
        assert_eq!(criteria.confidence_score, 0);
        assert!(!criteria.has_filters());
        assert_eq!(criteria.original_query, "   \t  ");
    }

    #[test]
    fn unrecognized_text_is_not_an_error() {
        let criteria = parse("quantum flux capacitor maintenance");
        assert_eq!(criteria.confidence_score, 0);
        assert!(!criteria.has_filters());
    }

    #[test]
    fn parses_bed_type_pool_city_and_price_cap() {
        let criteria = parse("3 bedroom house with pool in Los Angeles under 500k");
        assert_eq!(criteria.beds, Some(3));
        assert_eq!(criteria.min_beds, None);
        assert_eq!(criteria.property_type.as_deref(), Some("house"));
        assert_eq!(criteria.pool_private, Some(true));
        assert_eq!(criteria.city.as_deref(), Some("Los Angeles"));
        assert_eq!(criteria.max_price, Some(500_000.0));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.confidence_score, 75);
    }

    #[test]
    fn parses_min_baths_condo_city_and_view() {
        let criteria = parse("2+ bath condo in San Francisco with view");
        assert_eq!(criteria.min_baths, Some(2));
        assert_eq!(criteria.baths, None);
        assert_eq!(criteria.property_type.as_deref(), Some("condo"));
        assert_eq!(criteria.city.as_deref(), Some("San Francisco"));
        assert_eq!(criteria.view, Some(true));
        assert_eq!(criteria.confidence_score, 60);
    }

    #[test]
    fn parses_plural_type_price_range_and_garage() {
        let criteria = parse("Houses in San Diego between 400k and 600k with garage");
        assert_eq!(criteria.property_type.as_deref(), Some("house"));
        assert_eq!(criteria.city.as_deref(), Some("San Diego"));
        assert_eq!(criteria.min_price, Some(400_000.0));
        assert_eq!(criteria.max_price, Some(600_000.0));
        assert_eq!(criteria.garage, Some(true));
        assert_eq!(criteria.confidence_score, 60);
    }

    #[test]
    fn year_range_does_not_leak_into_prices() {
        let criteria = parse("built between 1990 and 2010");
        assert_eq!(criteria.min_year_built, Some(1990));
        assert_eq!(criteria.max_year_built, Some(2010));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.confidence_score, 15);
    }

    #[test]
    fn price_shorthand_normalizes_to_dollars() {
        assert_eq!(parse("under $500k").max_price, Some(500_000.0));
        assert_eq!(parse("under 500k").max_price, Some(500_000.0));
        assert_eq!(parse("under 500").max_price, Some(500_000.0));
        assert_eq!(parse("under $250,000").max_price, Some(250_000.0));
        assert_eq!(parse("over 1,250,000").min_price, Some(1_250_000.0));
    }

    #[test]
    fn dollar_range_parses_both_bounds() {
        let criteria = parse("$400,000 to $600,000");
        assert_eq!(criteria.min_price, Some(400_000.0));
        assert_eq!(criteria.max_price, Some(600_000.0));
        assert_eq!(criteria.confidence_score, 15);
    }

    #[test]
    fn bare_number_range_reads_as_thousands() {
        let criteria = parse("homes 300 to 500");
        assert_eq!(criteria.min_price, Some(300_000.0));
        assert_eq!(criteria.max_price, Some(500_000.0));
    }

    #[test]
    fn price_range_wins_over_single_bounds() {
        let criteria = parse("between 300k and 700k under 500k");
        assert_eq!(criteria.min_price, Some(300_000.0));
        assert_eq!(criteria.max_price, Some(700_000.0));
    }

    #[test]
    fn price_bounds_survive_adjacent_ordinary_words() {
        // Words that merely start with a unit token ("bay", "brand",
        // "Bakersfield") must not void the price
        assert_eq!(parse("condo under 500k bay area").max_price, Some(500_000.0));
        assert_eq!(parse("under 500k brand new").max_price, Some(500_000.0));

        let criteria = parse("homes 400k to 600k Bakersfield");
        assert_eq!(criteria.min_price, Some(400_000.0));
        assert_eq!(criteria.max_price, Some(600_000.0));
    }

    #[test]
    fn city_abbreviations_expand() {
        assert_eq!(parse("in LA").city.as_deref(), Some("Los Angeles"));
        assert_eq!(parse("near SF").city.as_deref(), Some("San Francisco"));
        assert_eq!(parse("at Fresno").city.as_deref(), Some("Fresno"));
    }

    #[test]
    fn city_requires_a_preposition() {
        assert_eq!(parse("Los Angeles homes").city, None);
    }

    #[test]
    fn first_city_mention_wins() {
        let criteria = parse("in San Diego near Los Angeles");
        assert_eq!(criteria.city.as_deref(), Some("San Diego"));
    }

    #[test]
    fn min_bedrooms_keyword_does_not_become_a_price() {
        let criteria = parse("at least 3 bedrooms");
        assert_eq!(criteria.min_beds, Some(3));
        assert_eq!(criteria.beds, None);
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.confidence_score, 15);
    }

    #[test]
    fn plus_marker_turns_beds_into_a_lower_bound() {
        let criteria = parse("3+ beds");
        assert_eq!(criteria.min_beds, Some(3));
        assert_eq!(criteria.beds, None);

        let criteria = parse("3 beds");
        assert_eq!(criteria.beds, Some(3));
        assert_eq!(criteria.min_beds, None);
    }

    #[test]
    fn bedroom_abbreviations_are_recognized() {
        assert_eq!(parse("2 br").beds, Some(2));
        assert_eq!(parse("4 bd").beds, Some(4));
        assert_eq!(parse("minimum 2 bedrooms").min_beds, Some(2));
    }

    #[test]
    fn fractional_baths_round_up() {
        assert_eq!(parse("2.5 baths").baths, Some(3));

        // A fractional count is still a bathroom amount, not a price floor
        let criteria = parse("at least 1.5 baths");
        assert_eq!(criteria.min_baths, Some(2));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.confidence_score, 15);
    }

    #[test]
    fn square_feet_range_does_not_leak_into_prices() {
        let criteria = parse("1000 to 2000 sq ft");
        assert_eq!(criteria.min_square_feet, Some(1000));
        assert_eq!(criteria.max_square_feet, Some(2000));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, None);
    }

    #[test]
    fn square_feet_bounds_parse_with_commas() {
        assert_eq!(parse("over 1,500 sqft").min_square_feet, Some(1500));
        assert_eq!(parse("over 1,500 sqft").min_price, None);
        assert_eq!(parse("under 2000 square feet").max_square_feet, Some(2000));
        assert_eq!(parse("under 2000 square feet").max_price, None);
    }

    #[test]
    fn features_need_an_explicit_trigger_word() {
        let criteria = parse("with pool has fireplace with a view with garage");
        assert_eq!(criteria.pool_private, Some(true));
        assert_eq!(criteria.fireplace, Some(true));
        assert_eq!(criteria.view, Some(true));
        assert_eq!(criteria.garage, Some(true));
        assert_eq!(criteria.confidence_score, 60);
    }

    #[test]
    fn bare_feature_words_are_ignored() {
        let criteria = parse("pool fireplace view garage");
        assert_eq!(criteria.pool_private, None);
        assert_eq!(criteria.fireplace, None);
        assert_eq!(criteria.view, None);
        assert_eq!(criteria.garage, None);
    }

    #[test]
    fn named_view_variants_count_as_view() {
        assert_eq!(parse("with ocean view").view, Some(true));
        assert_eq!(parse("has a city view").view, Some(true));
    }

    #[test]
    fn first_property_type_mention_wins() {
        let criteria = parse("townhouse or condo");
        assert_eq!(criteria.property_type.as_deref(), Some("townhouse"));
    }

    #[test]
    fn multi_word_property_types_parse() {
        assert_eq!(
            parse("single family near Oakland").property_type.as_deref(),
            Some("single family")
        );
    }

    #[test]
    fn year_bounds_parse_independently() {
        assert_eq!(parse("built after 1995").min_year_built, Some(1995));
        assert_eq!(parse("built before 2005").max_year_built, Some(2005));

        let criteria = parse("built after 2000 and built before 2015");
        assert_eq!(criteria.min_year_built, Some(2000));
        assert_eq!(criteria.max_year_built, Some(2015));
        assert_eq!(criteria.confidence_score, 30);
    }

    #[test]
    fn confidence_caps_at_one_hundred() {
        let criteria = parse(
            "4 bed 3 bath house with pool with garage with fireplace with a view \
             in Sacramento under 900k over 2000 sqft built after 2005",
        );
        assert_eq!(criteria.confidence_score, 100);
        assert_eq!(criteria.beds, Some(4));
        assert_eq!(criteria.baths, Some(3));
        assert_eq!(criteria.max_price, Some(900_000.0));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.min_square_feet, Some(2000));
        assert_eq!(criteria.min_year_built, Some(2005));
    }

    #[test]
    fn multibyte_text_near_a_match_is_handled() {
        let criteria = parse("🏠🏠🏠3+ bd🏠🏠");
        assert_eq!(criteria.min_beds, Some(3));
    }

    #[test]
    fn original_query_is_kept_verbatim() {
        let criteria = parse("  3 beds in Irvine  ");
        assert_eq!(criteria.original_query, "  3 beds in Irvine  ");
        assert_eq!(criteria.beds, Some(3));
        assert_eq!(criteria.city.as_deref(), Some("Irvine"));
    }

    #[test]
    fn oversized_counts_are_left_absent() {
        let criteria = parse("99999999999 beds");
        assert_eq!(criteria.beds, None);
        assert_eq!(criteria.min_beds, None);
        assert_eq!(criteria.confidence_score, 0);

        let criteria = parse("10000000000 baths");
        assert_eq!(criteria.baths, None);
        assert_eq!(criteria.min_baths, None);
        assert_eq!(criteria.confidence_score, 0);
    }
}
