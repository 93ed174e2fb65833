//! Record store: the single owner of the loaded dataset

use indexmap::IndexSet;
use serde::Serialize;
use tracing::info;

use rv_core::{select, FilterCriteria, RecallRecord};

use crate::config::{DatasetConfig, DatasetFormat};
use crate::sources::{CsvSource, JsonSource};
use crate::DataError;

/// Immutable, in-memory sequence of recall records, loaded once at startup.
///
/// The store is constructed explicitly and passed by reference to its
/// consumers; there are no update paths after `load`, so no locking is
/// involved anywhere downstream.
pub struct RecordStore {
    /// The normalized record sequence, in dataset order
    records: Vec<RecallRecord>,

    /// Name of the file the records came from
    source_name: String,
}

impl RecordStore {
    /// Load and normalize the configured dataset.
    ///
    /// Fails when the file is missing, unreadable, or structurally invalid;
    /// there is no partially loaded store.
    pub fn load(config: &DatasetConfig) -> Result<Self, DataError> {
        let raw = match config.format {
            DatasetFormat::Json => JsonSource::new(config.path.clone()).read_records()?,
            DatasetFormat::Csv => CsvSource::new(config.path.clone()).read_records()?,
        };

        let store = Self::from_named_records(raw, config.file_name());
        info!(
            "Loaded {} recall records from {}",
            store.len(),
            store.source_name()
        );
        Ok(store)
    }

    /// Build a store from records already in memory (tests, embedding)
    pub fn from_records(records: Vec<RecallRecord>) -> Self {
        Self::from_named_records(records, "memory".to_string())
    }

    fn from_named_records(records: Vec<RecallRecord>, source_name: String) -> Self {
        let records = records
            .into_iter()
            .map(RecallRecord::normalize)
            .collect();
        Self {
            records,
            source_name,
        }
    }

    /// The full normalized record sequence
    pub fn records(&self) -> &[RecallRecord] {
        &self.records
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset held no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Name of the backing dataset file
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Select matching records without touching the stored sequence
    pub fn select(&self, criteria: &FilterCriteria) -> Vec<RecallRecord> {
        select(&self.records, criteria)
    }

    /// Distinct makers, models, and vehicle years, in first-seen order
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }
}

/// Option lists for the dashboard's three filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub makers: Vec<String>,
    pub models: Vec<String>,
    pub vehicle_years: Vec<i32>,
}

impl FilterOptions {
    fn from_records(records: &[RecallRecord]) -> Self {
        let mut makers = IndexSet::new();
        let mut models = IndexSet::new();
        let mut vehicle_years = IndexSet::new();

        for record in records {
            makers.insert(record.maker.clone());
            models.insert(record.model.clone());
            vehicle_years.insert(record.vehicle_year);
        }

        Self {
            makers: makers.into_iter().collect(),
            models: models.into_iter().collect(),
            vehicle_years: vehicle_years.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_normalizes_ages() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "recalls.json",
            r#"[{"MAKER": "Ford", "vehicle_age_at_recall": -3},
                {"MAKER": "Toyota", "vehicle_age_at_recall": 2}]"#,
        );

        let store = RecordStore::load(&DatasetConfig::from_path(path).unwrap()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store
            .records()
            .iter()
            .all(|record| record.vehicle_age_at_recall >= 0));
        assert_eq!(store.records()[0].vehicle_age_at_recall, 3);
    }

    #[test]
    fn test_load_csv_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(
            &dir,
            "recalls.csv",
            "MAKER,MODEL,VEHIC-YEAR\nFord,Focus,2015\n",
        );

        let store = RecordStore::load(&DatasetConfig::from_path(path).unwrap()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].maker, "Ford");
        assert_eq!(store.source_name(), "recalls.csv");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = DatasetConfig::new(
            std::path::PathBuf::from("/nonexistent/recalls.json"),
            DatasetFormat::Json,
        );
        assert!(matches!(RecordStore::load(&config), Err(DataError::Io(_))));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dataset(&dir, "recalls.json", "{\"not\": \"an array\"}");

        let result = RecordStore::load(&DatasetConfig::from_path(path).unwrap());
        assert!(matches!(result, Err(DataError::Shape(_))));
    }

    #[test]
    fn test_select_leaves_store_untouched() {
        let store = RecordStore::from_records(vec![
            RecallRecord {
                maker: "Ford".to_string(),
                ..Default::default()
            },
            RecallRecord {
                maker: "Toyota".to_string(),
                ..Default::default()
            },
        ]);

        let selected = store.select(&FilterCriteria::new().with_maker("Ford"));
        assert_eq!(selected.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_filter_options_first_seen_order() {
        let record = |maker: &str, model: &str, year: i32| RecallRecord {
            maker: maker.to_string(),
            model: model.to_string(),
            vehicle_year: year,
            ..Default::default()
        };

        let store = RecordStore::from_records(vec![
            record("Toyota", "Corolla", 2016),
            record("Ford", "Focus", 2014),
            record("Toyota", "Camry", 2016),
            record("Ford", "Focus", 2015),
        ]);

        let options = store.filter_options();
        assert_eq!(options.makers, vec!["Toyota", "Ford"]);
        assert_eq!(options.models, vec!["Corolla", "Focus", "Camry"]);
        assert_eq!(options.vehicle_years, vec![2016, 2014, 2015]);
    }
}
