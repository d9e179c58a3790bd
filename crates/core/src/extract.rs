//! Region and year extraction from free-text queries.

use std::sync::LazyLock;

use regex::Regex;

use crate::region::{Region, REGION_VOCABULARY};

/// Four-digit years starting with 19 or 20. No further bounds validation.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(19|20)\d{2}\b").unwrap_or_else(|e| panic!("invalid year regex: {e}"))
});

/// Signals extracted from a user query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractedContext {
    pub region: Option<Region>,
    pub year: Option<i32>,
}

/// Extract an optional region and year from raw query text.
///
/// Pure and total: any input yields a result, with both fields absent as the
/// default. Region matching is a case-insensitive substring scan over the
/// fixed vocabulary; the first vocabulary entry that occurs anywhere in the
/// text wins, regardless of position. Matching is not word-bounded, so a
/// region name inside a longer word still matches.
pub fn extract_context(query: &str) -> ExtractedContext {
    let lowered = query.to_lowercase();

    let region = REGION_VOCABULARY
        .into_iter()
        .find(|r| lowered.contains(&r.as_str().to_lowercase()));

    let year = YEAR_RE
        .find(query)
        .and_then(|m| m.as_str().parse::<i32>().ok());

    ExtractedContext { region, year }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_region_case_insensitive() {
        let ctx = extract_context("how hot was TEXAS last summer?");
        assert_eq!(ctx.region, Some(Region::Texas));
        assert_eq!(ctx.year, None);
    }

    #[test]
    fn test_vocabulary_order_wins_over_text_order() {
        // Europe appears first in the text, but India precedes it in the
        // vocabulary, so India is extracted.
        let ctx = extract_context("compare Europe with India");
        assert_eq!(ctx.region, Some(Region::India));
    }

    #[test]
    fn test_region_matches_inside_longer_word() {
        // No word-boundary guarantee.
        let ctx = extract_context("the africanized bees spread north");
        assert_eq!(ctx.region, Some(Region::Africa));
    }

    #[test]
    fn test_extracts_year_with_19_prefix() {
        let ctx = extract_context("what happened in 1998?");
        assert_eq!(ctx.year, Some(1998));
    }

    #[test]
    fn test_extracts_year_with_20_prefix() {
        let ctx = extract_context("anomaly for 2016 please");
        assert_eq!(ctx.year, Some(2016));
    }

    #[test]
    fn test_first_year_in_text_wins() {
        let ctx = extract_context("between 1951 and 1980");
        assert_eq!(ctx.year, Some(1951));
    }

    #[test]
    fn test_ignores_year_with_other_prefix() {
        let ctx = extract_context("back in 1850 or maybe 2150");
        assert_eq!(ctx.year, None);
    }

    #[test]
    fn test_ignores_digits_embedded_in_longer_number() {
        let ctx = extract_context("sample id 192019 is unrelated");
        assert_eq!(ctx.year, None);
    }

    #[test]
    fn test_both_signals_extracted() {
        let ctx = extract_context("How warm was California in 2020?");
        assert_eq!(ctx.region, Some(Region::California));
        assert_eq!(ctx.year, Some(2020));
    }

    #[test]
    fn test_empty_input_yields_default() {
        assert_eq!(extract_context(""), ExtractedContext::default());
    }
}
