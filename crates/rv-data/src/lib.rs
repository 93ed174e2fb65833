//! Dataset loading and the record store for the recall analytics platform

pub mod config;
pub mod sources;
pub mod store;

use thiserror::Error;

// Re-exports
pub use config::{DatasetConfig, DatasetFormat};
pub use sources::{CsvSource, JsonSource};
pub use store::{FilterOptions, RecordStore};

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("Dataset shape error: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            serde_json::error::Category::Io => {
                DataError::Io(std::io::Error::new(std::io::ErrorKind::Other, error.to_string()))
            }
            _ => DataError::Json(error.to_string()),
        }
    }
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                DataError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => DataError::Csv(error.to_string()),
        }
    }
}
