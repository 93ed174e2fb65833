//! JSON dataset source

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::debug;

use rv_core::{parse_recall_date, RecallRecord};

use super::columns;
use crate::DataError;

/// JSON dataset source, expecting a top-level array of flat record objects.
///
/// The top-level shape is validated strictly (anything other than an array
/// of objects is a fatal error), but individual fields are coerced
/// permissively: a missing or mistyped string becomes empty, a missing or
/// mistyped number becomes 0. One bad field never drops the batch.
pub struct JsonSource {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonSource {
    /// Create a new JSON source from a file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read every record from the file
    pub fn read_records(&self) -> Result<Vec<RecallRecord>, DataError> {
        let file = File::open(&self.path)?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        records_from_value(value)
    }
}

/// Convert a parsed JSON document into records
pub(crate) fn records_from_value(value: Value) -> Result<Vec<RecallRecord>, DataError> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(DataError::Shape(format!(
                "expected a top-level array of records, found {}",
                value_kind(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let fields = match row {
            Value::Object(fields) => fields,
            other => {
                return Err(DataError::Shape(format!(
                    "record {} is not an object, found {}",
                    index,
                    value_kind(&other)
                )))
            }
        };
        records.push(record_from_fields(&fields));
    }

    debug!("Parsed {} JSON records", records.len());
    Ok(records)
}

fn record_from_fields(fields: &Map<String, Value>) -> RecallRecord {
    RecallRecord {
        maker: string_field(fields, columns::MAKER),
        model: string_field(fields, columns::MODEL),
        vehicle_year: int_field(fields, columns::VEHICLE_YEAR),
        component: string_field(fields, columns::COMPONENT),
        recall_type: string_field(fields, columns::RECALL_TYPE),
        recall_date: fields
            .get(columns::RECALL_DATE)
            .and_then(Value::as_str)
            .and_then(parse_recall_date),
        recall_year: int_field(fields, columns::RECALL_YEAR),
        vehicle_age_at_recall: int_field(fields, columns::VEHICLE_AGE),
        potential_units_affected: float_field(fields, columns::UNITS_AFFECTED),
        defect_summary: string_field(fields, columns::DEFECT_SUMMARY),
        consequence_summary: string_field(fields, columns::CONSEQ_SUMMARY),
        corrective_summary: string_field(fields, columns::CORRECTIVE_SUMMARY),
        recall_notes: string_field(fields, columns::RECALL_NOTES),
        failure_summary: string_field(fields, columns::FAIL_SUMMARY),
        failure_detail: string_field(fields, columns::FAIL_DETAIL),
    }
}

/// Missing or non-string values coerce to the empty string
fn string_field(fields: &Map<String, Value>, name: &str) -> String {
    fields
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Missing or non-numeric values coerce to 0; numeric strings still parse
fn int_field(fields: &Map<String, Value>, name: &str) -> i32 {
    match fields.get(name) {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value as i64))
            .unwrap_or(0) as i32,
        Some(Value::String(raw)) => raw.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Missing or non-numeric values coerce to 0; numeric strings still parse
fn float_field(fields: &Map<String, Value>, name: &str) -> f64 {
    match fields.get(name) {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(raw)) => raw.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
