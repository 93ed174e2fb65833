//! CSV dataset source

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use ahash::AHashMap;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use rv_core::{parse_recall_date, RecallRecord};

use super::columns;
use crate::DataError;

/// CSV dataset source with a header row naming the recall columns.
///
/// Columns are located by header name, so column order does not matter and
/// extra columns are ignored. Field values are coerced permissively, the
/// same way the JSON source coerces them.
pub struct CsvSource {
    /// Path to the CSV file
    path: PathBuf,
}

impl CsvSource {
    /// Create a new CSV source from a file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read every record from the file
    pub fn read_records(&self) -> Result<Vec<RecallRecord>, DataError> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let header_index = HeaderIndex::new(reader.headers()?);

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            records.push(header_index.record_from_row(&row));
        }

        debug!("Parsed {} CSV records", records.len());
        Ok(records)
    }
}

/// Column positions resolved from the header row
struct HeaderIndex {
    positions: AHashMap<String, usize>,
}

impl HeaderIndex {
    fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_string(), index))
            .collect();
        Self { positions }
    }

    fn record_from_row(&self, row: &StringRecord) -> RecallRecord {
        RecallRecord {
            maker: self.string_field(row, columns::MAKER),
            model: self.string_field(row, columns::MODEL),
            vehicle_year: self.int_field(row, columns::VEHICLE_YEAR),
            component: self.string_field(row, columns::COMPONENT),
            recall_type: self.string_field(row, columns::RECALL_TYPE),
            recall_date: self.date_field(row, columns::RECALL_DATE),
            recall_year: self.int_field(row, columns::RECALL_YEAR),
            vehicle_age_at_recall: self.int_field(row, columns::VEHICLE_AGE),
            potential_units_affected: self.float_field(row, columns::UNITS_AFFECTED),
            defect_summary: self.string_field(row, columns::DEFECT_SUMMARY),
            consequence_summary: self.string_field(row, columns::CONSEQ_SUMMARY),
            corrective_summary: self.string_field(row, columns::CORRECTIVE_SUMMARY),
            recall_notes: self.string_field(row, columns::RECALL_NOTES),
            failure_summary: self.string_field(row, columns::FAIL_SUMMARY),
            failure_detail: self.string_field(row, columns::FAIL_DETAIL),
        }
    }

    fn raw_field<'a>(&self, row: &'a StringRecord, name: &str) -> &'a str {
        self.positions
            .get(name)
            .and_then(|&index| row.get(index))
            .unwrap_or("")
    }

    fn string_field(&self, row: &StringRecord, name: &str) -> String {
        self.raw_field(row, name).to_string()
    }

    /// Unparseable values coerce to 0; decimal renderings of whole years
    /// ("2016.0") still resolve
    fn int_field(&self, row: &StringRecord, name: &str) -> i32 {
        let raw = self.raw_field(row, name).trim();
        raw.parse::<i32>()
            .or_else(|_| raw.parse::<f64>().map(|value| value as i32))
            .unwrap_or(0)
    }

    fn float_field(&self, row: &StringRecord, name: &str) -> f64 {
        self.raw_field(row, name).trim().parse().unwrap_or(0.0)
    }

    fn date_field(&self, row: &StringRecord, name: &str) -> Option<NaiveDate> {
        parse_recall_date(self.raw_field(row, name).trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source_for(contents: &str) -> (tempfile::TempDir, CsvSource) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recalls.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, CsvSource::new(path))
    }

    #[test]
    fn test_reads_headered_rows() {
        let (_dir, source) = source_for(
            "MAKER,MODEL,VEHIC-YEAR,COMPONENT,RECALL_TYPE,RECALL_DATE,recall_year,vehicle_age_at_recall,POTENTIAL_UNITS_AFFECTED_PRED\n\
             Ford,Focus,2015,Brakes,Safety,2019-04-30,2019,4,1200.5\n\
             Toyota,Corolla,2016,Airbag,Safety,2020-01-15,2020,-4,300\n",
        );

        let records = source.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].maker, "Ford");
        assert_eq!(records[0].potential_units_affected, 1200.5);
        assert_eq!(
            records[0].recall_date,
            NaiveDate::from_ymd_opt(2019, 4, 30)
        );
        // Raw inversion preserved at this layer
        assert_eq!(records[1].vehicle_age_at_recall, -4);
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let (_dir, source) = source_for(
            "COMPONENT,MAKER,recall_year\n\
             Brakes,Ford,2019\n",
        );

        let records = source.read_records().unwrap();
        assert_eq!(records[0].maker, "Ford");
        assert_eq!(records[0].component, "Brakes");
        assert_eq!(records[0].recall_year, 2019);
        // Absent columns coerce to defaults
        assert_eq!(records[0].model, "");
        assert_eq!(records[0].potential_units_affected, 0.0);
    }

    #[test]
    fn test_bad_values_coerce_without_dropping_rows() {
        let (_dir, source) = source_for(
            "MAKER,VEHIC-YEAR,POTENTIAL_UNITS_AFFECTED_PRED\n\
             Ford,not-a-year,oops\n\
             Toyota,2016.0,250\n",
        );

        let records = source.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vehicle_year, 0);
        assert_eq!(records[0].potential_units_affected, 0.0);
        assert_eq!(records[1].vehicle_year, 2016);
        assert_eq!(records[1].potential_units_affected, 250.0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = CsvSource::new(PathBuf::from("/nonexistent/recalls.csv"));
        assert!(matches!(
            source.read_records(),
            Err(DataError::Io(_))
        ));
    }
}
