//! Recall record shape and normalization

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One vehicle-component recall event.
///
/// This is the normalized shape: ages are non-negative and missing source
/// fields have already been coerced to 0 or the empty string by the loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecallRecord {
    /// Manufacturer name, exactly as stored in the dataset
    pub maker: String,

    /// Vehicle model name
    pub model: String,

    /// Model year of the vehicle
    pub vehicle_year: i32,

    /// Affected component name
    pub component: String,

    /// Category of recall
    pub recall_type: String,

    /// Date the recall was issued, when the dataset carries a parseable one
    pub recall_date: Option<NaiveDate>,

    /// Calendar year of the recall (may differ from the model year)
    pub recall_year: i32,

    /// Vehicle age in years at recall time, always non-negative
    pub vehicle_age_at_recall: i32,

    /// Predicted count of affected units
    pub potential_units_affected: f64,

    // Free-text fields are carried through untouched and never aggregated.
    pub defect_summary: String,
    pub consequence_summary: String,
    pub corrective_summary: String,
    pub recall_notes: String,
    pub failure_summary: String,
    pub failure_detail: String,
}

impl RecallRecord {
    /// Fold a negative age (a data-entry inversion in the raw dataset)
    /// into the non-negative value the aggregations expect.
    pub fn normalize(mut self) -> Self {
        if self.vehicle_age_at_recall < 0 {
            self.vehicle_age_at_recall = -self.vehicle_age_at_recall;
        }
        self
    }
}

/// Parse the `YYYY-MM-DD` prefix of a raw date value.
///
/// Returns `None` when the value is too short or does not start with an
/// ISO calendar date; timestamps with a time suffix still parse.
pub fn parse_recall_date(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_flips_negative_age() {
        let record = RecallRecord {
            vehicle_age_at_recall: -3,
            ..Default::default()
        };

        assert_eq!(record.normalize().vehicle_age_at_recall, 3);
    }

    #[test]
    fn test_normalize_keeps_non_negative_age() {
        let record = RecallRecord {
            vehicle_age_at_recall: 7,
            ..Default::default()
        };

        assert_eq!(record.normalize().vehicle_age_at_recall, 7);
    }

    #[test]
    fn test_parse_recall_date() {
        assert_eq!(
            parse_recall_date("2019-04-30"),
            NaiveDate::from_ymd_opt(2019, 4, 30)
        );
        // Timestamp suffixes are tolerated
        assert_eq!(
            parse_recall_date("2019-04-30T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2019, 4, 30)
        );
        assert_eq!(parse_recall_date(""), None);
        assert_eq!(parse_recall_date("not a date"), None);
        assert_eq!(parse_recall_date("2019"), None);
    }
}
