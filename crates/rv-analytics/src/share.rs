//! Share-of-total breakdowns (treemap basis)

use indexmap::IndexMap;
use serde::Serialize;

use rv_core::RecallRecord;

/// A summed value and its share of the grand total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShareEntry {
    /// Sum of the extracted value for this key
    pub value: f64,

    /// Percentage of the grand total; 0 when the grand total is 0
    pub percentage: f64,
}

/// Per-key value and percentage of the grand total, keys in first-seen
/// order.
///
/// When the grand total is 0 every percentage is reported as 0, never NaN.
pub fn share_of_total<F, V>(
    records: &[RecallRecord],
    key_fn: F,
    value_fn: V,
) -> IndexMap<String, ShareEntry>
where
    F: Fn(&RecallRecord) -> String,
    V: Fn(&RecallRecord) -> f64,
{
    let mut sums: IndexMap<String, f64> = IndexMap::new();
    let mut grand_total = 0.0;

    for record in records {
        let value = value_fn(record);
        *sums.entry(key_fn(record)).or_insert(0.0) += value;
        grand_total += value;
    }

    sums.into_iter()
        .map(|(key, value)| {
            let percentage = if grand_total > 0.0 {
                value / grand_total * 100.0
            } else {
                0.0
            };
            (key, ShareEntry { value, percentage })
        })
        .collect()
}

/// Affected-unit share per manufacturer
pub fn units_share_by_maker(records: &[RecallRecord]) -> IndexMap<String, ShareEntry> {
    share_of_total(
        records,
        |record| record.maker.clone(),
        |record| record.potential_units_affected,
    )
}
