use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Rating statistics for one app in one storefront.
///
/// `rating_counts` runs from 5★ down to 1★. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    #[serde(rename = "ratingAverage")]
    pub rating_average: f64,
    #[serde(rename = "totalNumberOfRatings")]
    pub total_number_of_ratings: u64,
    #[serde(rename = "ratingCounts")]
    pub rating_counts: [u64; 5],
}

impl RatingSnapshot {
    pub const MAX_AVERAGE: f64 = 5.0;

    /// Rejects averages outside `[0, 5]`. The histogram total is not cross-checked.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=Self::MAX_AVERAGE).contains(&self.rating_average) {
            return Err(Error::Extraction(format!(
                "ratingAverage {} is outside 0..=5",
                self.rating_average
            )));
        }
        Ok(())
    }

    pub fn histogram_total(&self) -> u64 {
        self.rating_counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(average: f64) -> RatingSnapshot {
        RatingSnapshot {
            rating_average: average,
            total_number_of_ratings: 10,
            rating_counts: [6, 2, 1, 0, 1],
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(snapshot(0.0).validate().is_ok());
        assert!(snapshot(5.0).validate().is_ok());
        assert!(snapshot(4.7).validate().is_ok());
    }

    #[test]
    fn out_of_range_average_is_an_extraction_error() {
        assert!(matches!(snapshot(5.1).validate(), Err(Error::Extraction(_))));
        assert!(matches!(snapshot(-0.5).validate(), Err(Error::Extraction(_))));
        assert!(matches!(snapshot(f64::NAN).validate(), Err(Error::Extraction(_))));
    }

    #[test]
    fn total_mismatch_is_tolerated() {
        let mut snapshot = snapshot(4.0);
        snapshot.total_number_of_ratings = 999;
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.histogram_total(), 10);
    }
}
