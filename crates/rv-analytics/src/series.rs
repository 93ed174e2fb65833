//! Time-oriented series and per-record chart points

use indexmap::IndexMap;
use serde::Serialize;

use rv_core::RecallRecord;

use crate::grouping::sum_by_key;

/// Recall counts per `YYYY-MM` month of the recall date.
///
/// Records without a parseable date are skipped; every emitted key is a
/// real month.
pub fn monthly_recall_trend(records: &[RecallRecord]) -> IndexMap<String, u64> {
    let mut counts = IndexMap::new();
    for record in records {
        if let Some(date) = record.recall_date {
            *counts
                .entry(date.format("%Y-%m").to_string())
                .or_insert(0) += 1;
        }
    }
    counts
}

/// Summed affected units per calendar year of the recall (time-series
/// basis)
pub fn units_by_recall_year(records: &[RecallRecord]) -> IndexMap<i32, f64> {
    sum_by_key(
        records,
        |record| record.recall_year,
        |record| record.potential_units_affected,
    )
}

/// One bubble per record: model year against affected units, sized by the
/// vehicle's age at recall time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubblePoint {
    /// Vehicle model year
    pub x: i32,

    /// Predicted affected units
    pub y: f64,

    /// Vehicle age at recall, in years
    pub size: i32,

    /// Recall type, for series grouping in the renderer
    pub label: String,
}

/// Map each record to its bubble-chart point, preserving record order
pub fn bubble_points(records: &[RecallRecord]) -> Vec<BubblePoint> {
    records
        .iter()
        .map(|record| BubblePoint {
            x: record.vehicle_year,
            y: record.potential_units_affected,
            size: record.vehicle_age_at_recall,
            label: record.recall_type.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: Option<&str>, year: i32, units: f64) -> RecallRecord {
        RecallRecord {
            recall_date: date.and_then(rv_core::parse_recall_date),
            recall_year: year,
            potential_units_affected: units,
            ..Default::default()
        }
    }

    #[test]
    fn test_trend_groups_by_month() {
        let records = vec![
            record(Some("2019-04-02"), 2019, 0.0),
            record(Some("2019-04-28"), 2019, 0.0),
            record(Some("2019-05-01"), 2019, 0.0),
        ];

        let trend = monthly_recall_trend(&records);
        assert_eq!(trend["2019-04"], 2);
        assert_eq!(trend["2019-05"], 1);
    }

    #[test]
    fn test_trend_skips_dateless_records() {
        let records = vec![
            record(Some("2019-04-02"), 2019, 0.0),
            record(None, 2019, 0.0),
        ];

        let trend = monthly_recall_trend(&records);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend["2019-04"], 1);
    }

    #[test]
    fn test_units_by_recall_year_sums() {
        let records = vec![
            record(None, 2019, 100.0),
            record(None, 2019, 50.0),
            record(None, 2020, 10.0),
        ];

        let series = units_by_recall_year(&records);
        assert_eq!(series[&2019], 150.0);
        assert_eq!(series[&2020], 10.0);
    }

    #[test]
    fn test_bubble_points_carry_record_fields() {
        let mut first = record(None, 2019, 500.0);
        first.vehicle_year = 2015;
        first.vehicle_age_at_recall = 4;
        first.recall_type = "Safety".to_string();

        let points = bubble_points(&[first]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 2015);
        assert_eq!(points[0].y, 500.0);
        assert_eq!(points[0].size, 4);
        assert_eq!(points[0].label, "Safety");
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(monthly_recall_trend(&[]).is_empty());
        assert!(units_by_recall_year(&[]).is_empty());
        assert!(bubble_points(&[]).is_empty());
    }

    #[test]
    fn test_month_formatting_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 9);
        let records = vec![RecallRecord {
            recall_date: date,
            ..Default::default()
        }];

        let trend = monthly_recall_trend(&records);
        assert!(trend.contains_key("2021-03"));
    }
}
