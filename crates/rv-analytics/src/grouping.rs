//! Frequency tables and grouped sums

use std::hash::Hash;

use indexmap::IndexMap;

use rv_core::RecallRecord;

/// Count records per key; keys appear in first-seen order
pub fn counts_by_key<K, F>(records: &[RecallRecord], key_fn: F) -> IndexMap<K, u64>
where
    K: Hash + Eq,
    F: Fn(&RecallRecord) -> K,
{
    let mut counts = IndexMap::new();
    for record in records {
        *counts.entry(key_fn(record)).or_insert(0) += 1;
    }
    counts
}

/// Sum `value_fn` per key; keys appear in first-seen order
pub fn sum_by_key<K, F, V>(records: &[RecallRecord], key_fn: F, value_fn: V) -> IndexMap<K, f64>
where
    K: Hash + Eq,
    F: Fn(&RecallRecord) -> K,
    V: Fn(&RecallRecord) -> f64,
{
    let mut sums = IndexMap::new();
    for record in records {
        *sums.entry(key_fn(record)).or_insert(0.0) += value_fn(record);
    }
    sums
}

/// Sum `value_fn` under two nested keys; both levels keep first-seen order
pub fn sum_by_two_keys<K1, K2, F1, F2, V>(
    records: &[RecallRecord],
    key_fn1: F1,
    key_fn2: F2,
    value_fn: V,
) -> IndexMap<K1, IndexMap<K2, f64>>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
    F1: Fn(&RecallRecord) -> K1,
    F2: Fn(&RecallRecord) -> K2,
    V: Fn(&RecallRecord) -> f64,
{
    let mut sums: IndexMap<K1, IndexMap<K2, f64>> = IndexMap::new();
    for record in records {
        *sums
            .entry(key_fn1(record))
            .or_insert_with(IndexMap::new)
            .entry(key_fn2(record))
            .or_insert(0.0) += value_fn(record);
    }
    sums
}

/// Recall counts per calendar year of the recall
pub fn recalls_by_year(records: &[RecallRecord]) -> IndexMap<i32, u64> {
    counts_by_key(records, |record| record.recall_year)
}

/// Recall counts per recall type (bar/donut chart basis)
pub fn recalls_by_type(records: &[RecallRecord]) -> IndexMap<String, u64> {
    counts_by_key(records, |record| record.recall_type.clone())
}

/// Recall counts per affected component
pub fn recalls_by_component(records: &[RecallRecord]) -> IndexMap<String, u64> {
    counts_by_key(records, |record| record.component.clone())
}

/// Recall counts per vehicle model year
pub fn recalls_by_vehicle_year(records: &[RecallRecord]) -> IndexMap<i32, u64> {
    counts_by_key(records, |record| record.vehicle_year)
}

/// Summed affected units per recall type and recall year (stacked
/// line/area/bar basis)
pub fn units_by_type_and_year(records: &[RecallRecord]) -> IndexMap<String, IndexMap<i32, f64>> {
    sum_by_two_keys(
        records,
        |record| record.recall_type.clone(),
        |record| record.recall_year,
        |record| record.potential_units_affected,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(recall_type: &str, year: i32, units: f64) -> RecallRecord {
        RecallRecord {
            recall_type: recall_type.to_string(),
            recall_year: year,
            potential_units_affected: units,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_by_key_first_seen_order() {
        let records = vec![
            record("Safety", 2019, 0.0),
            record("Compliance", 2019, 0.0),
            record("Safety", 2020, 0.0),
        ];

        let counts = recalls_by_type(&records);
        let keys: Vec<_> = counts.keys().cloned().collect();
        assert_eq!(keys, vec!["Safety", "Compliance"]);
        assert_eq!(counts["Safety"], 2);
        assert_eq!(counts["Compliance"], 1);
    }

    #[test]
    fn test_recalls_by_year() {
        let records = vec![
            record("Safety", 2019, 0.0),
            record("Safety", 2020, 0.0),
            record("Safety", 2019, 0.0),
        ];

        let by_year = recalls_by_year(&records);
        assert_eq!(by_year[&2019], 2);
        assert_eq!(by_year[&2020], 1);
    }

    #[test]
    fn test_empty_input_gives_empty_mappings() {
        let records: Vec<RecallRecord> = Vec::new();

        assert!(recalls_by_year(&records).is_empty());
        assert!(recalls_by_type(&records).is_empty());
        assert!(units_by_type_and_year(&records).is_empty());
    }

    #[test]
    fn test_sum_by_two_keys_nests_and_sums() {
        let records = vec![
            record("Safety", 2019, 100.0),
            record("Safety", 2019, 50.0),
            record("Safety", 2020, 10.0),
            record("Compliance", 2019, 5.0),
        ];

        let sums = units_by_type_and_year(&records);
        assert_eq!(sums["Safety"][&2019], 150.0);
        assert_eq!(sums["Safety"][&2020], 10.0);
        assert_eq!(sums["Compliance"][&2019], 5.0);
        assert_eq!(sums.len(), 2);
    }

    #[test]
    fn test_generic_counts_by_custom_key() {
        let mut with_maker = record("Safety", 2019, 0.0);
        with_maker.maker = "Ford".to_string();
        let records = vec![with_maker.clone(), with_maker];

        let counts = counts_by_key(&records, |r| r.maker.clone());
        assert_eq!(counts["Ford"], 2);
    }
}
