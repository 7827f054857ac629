//! Pulls the `productRatings` shelf out of a product page.
//!
//! The page template serialises its shelves as JSON inside a script tag; the
//! ratings shelf looks like
//! `"contentType":"productRatings","marker":null,"items":[{...}]`.
//! Nothing else on the page is parsed, so a template change on the store side
//! surfaces as a "block not found" error rather than wrong numbers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;
use crate::error::{Error, Result};
use crate::models::RatingSnapshot;

static PRODUCT_RATINGS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)"contentType":"productRatings","marker":null,"items":\[(\{.*?\})\]"#)
        .unwrap()
});

const REQUIRED_KEYS: [&str; 3] = ["ratingAverage", "totalNumberOfRatings", "ratingCounts"];

pub fn extract_ratings(html: &str) -> Result<RatingSnapshot> {
    let block = PRODUCT_RATINGS_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            Error::Extraction("productRatings block not found in HTML response".to_string())
        })?
        .as_str();

    debug!(block_len = block.len(), "Found productRatings block");

    // The capture ends at the first `}]`, so it may hold several items; the first one is the ratings.
    let items: Vec<Value> = serde_json::from_str(&format!("[{block}]")).map_err(|e| {
        debug!(error = %e, block = block, "Invalid productRatings JSON");
        Error::Extraction(format!("Failed to decode productRatings JSON: {e}"))
    })?;
    let parsed = items
        .into_iter()
        .next()
        .filter(Value::is_object)
        .ok_or_else(|| {
            Error::Extraction("productRatings block does not start with an object".to_string())
        })?;

    let missing_keys: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| parsed.get(key).is_none())
        .collect();
    if !missing_keys.is_empty() {
        return Err(Error::Extraction(format!(
            "Missing expected keys in productRatings block: {}",
            missing_keys.join(", ")
        )));
    }

    let counts_ok = parsed["ratingCounts"]
        .as_array()
        .is_some_and(|counts| counts.len() == 5 && counts.iter().all(Value::is_u64));
    if !counts_ok {
        return Err(Error::Extraction(
            "ratingCounts must be a list of five non-negative integers (5★ to 1★)".to_string(),
        ));
    }

    let snapshot: RatingSnapshot = serde_json::from_value(parsed).map_err(|e| {
        Error::Extraction(format!("Malformed productRatings block: {e}"))
    })?;
    snapshot.validate()?;

    debug!(
        rating_average = snapshot.rating_average,
        total_number_of_ratings = snapshot.total_number_of_ratings,
        histogram_total = snapshot.histogram_total(),
        "Extracted rating snapshot"
    );

    Ok(snapshot)
}
