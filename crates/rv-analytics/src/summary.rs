//! Summary statistics for the dashboard's KPI panels

use ahash::AHashMap;
use serde::Serialize;

use rv_core::RecallRecord;

/// Label reported when a "most frequent" question has no data to answer
pub const NO_DATA: &str = "N/A";

/// Sum of predicted affected units across `records`; 0 for an empty slice
pub fn total_units_affected(records: &[RecallRecord]) -> f64 {
    records
        .iter()
        .map(|record| record.potential_units_affected)
        .sum()
}

/// Mean of predicted affected units; 0 for an empty slice
pub fn average_units_affected(records: &[RecallRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    total_units_affected(records) / records.len() as f64
}

/// Component with the highest record count, `"N/A"` when empty.
///
/// Ties go to the key that reached the winning count first in record
/// order; a later key with an equal count never displaces it.
pub fn most_frequent_component(records: &[RecallRecord]) -> String {
    most_frequent_by(records, |record| record.component.as_str())
}

/// Recall type with the highest record count, same tie rule as
/// [`most_frequent_component`]
pub fn most_frequent_recall_type(records: &[RecallRecord]) -> String {
    most_frequent_by(records, |record| record.recall_type.as_str())
}

/// Single left-to-right scan with running counts; the incumbent winner is
/// replaced only when a key strictly exceeds its count.
fn most_frequent_by<'a, F>(records: &'a [RecallRecord], key_fn: F) -> String
where
    F: Fn(&'a RecallRecord) -> &'a str,
{
    let mut counts: AHashMap<&str, u64> = AHashMap::new();
    let mut best: Option<(&str, u64)> = None;

    for record in records {
        let key = key_fn(record);
        let count = counts.entry(key).or_insert(0);
        *count += 1;
        let count = *count;

        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }

    best.map(|(key, _)| key.to_string())
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// The KPI block at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub record_count: usize,
    pub total_units_affected: f64,
    pub average_units_affected: f64,
    pub most_frequent_component: String,
    pub most_frequent_recall_type: String,
}

impl DashboardSummary {
    /// Compute every KPI over one filtered selection
    pub fn compute(records: &[RecallRecord]) -> Self {
        Self {
            record_count: records.len(),
            total_units_affected: total_units_affected(records),
            average_units_affected: average_units_affected(records),
            most_frequent_component: most_frequent_component(records),
            most_frequent_recall_type: most_frequent_recall_type(records),
        }
    }
}
