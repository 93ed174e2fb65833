//! Dataset configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::DataError;

/// Supported dataset file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        if extension.eq_ignore_ascii_case("json") {
            Some(DatasetFormat::Json)
        } else if extension.eq_ignore_ascii_case("csv") {
            Some(DatasetFormat::Csv)
        } else {
            None
        }
    }
}

/// Configuration for a dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the dataset file
    pub path: PathBuf,

    /// File format
    pub format: DatasetFormat,
}

impl DatasetConfig {
    /// Create a configuration with an explicit format
    pub fn new(path: PathBuf, format: DatasetFormat) -> Self {
        Self { path, format }
    }

    /// Create a configuration, detecting the format from the extension
    pub fn from_path(path: PathBuf) -> Result<Self, DataError> {
        let format = DatasetFormat::from_path(&path).ok_or_else(|| {
            DataError::Shape(format!(
                "unsupported dataset extension: {}",
                path.display()
            ))
        })?;
        Ok(Self { path, format })
    }

    /// Get the file name of the dataset
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("data/recalls.json")),
            Some(DatasetFormat::Json)
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("recalls.CSV")),
            Some(DatasetFormat::Csv)
        );
        assert_eq!(DatasetFormat::from_path(Path::new("recalls.parquet")), None);
        assert_eq!(DatasetFormat::from_path(Path::new("recalls")), None);
    }

    #[test]
    fn test_config_rejects_unknown_extension() {
        let result = DatasetConfig::from_path(PathBuf::from("recalls.xml"));
        assert!(matches!(result, Err(DataError::Shape(_))));
    }
}
