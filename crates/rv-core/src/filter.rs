//! Filter criteria and record selection

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::RecallRecord;

/// Sentinel filter value meaning "no constraint", as emitted by the
/// dashboard's dropdowns.
pub const ALL_SENTINEL: &str = "all";

/// Equality constraints narrowing the active record subsequence.
///
/// Absent criteria impose no constraint; present criteria compose by
/// logical AND. String matching is exact and case-sensitive against the
/// stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Manufacturer name to match
    pub maker: Option<String>,

    /// Model name to match
    pub model: Option<String>,

    /// Vehicle model year to match
    pub vehicle_year: Option<i32>,
}

impl FilterCriteria {
    /// Create unconstrained criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw query values.
    ///
    /// Empty values and the `"all"` sentinel impose no constraint. A year
    /// value that does not parse as an integer is logged and ignored.
    pub fn from_query(maker: Option<&str>, model: Option<&str>, year: Option<&str>) -> Self {
        let vehicle_year = year.and_then(|raw| {
            let raw = raw.trim();
            if is_unset(raw) {
                return None;
            }
            match raw.parse() {
                Ok(year) => Some(year),
                Err(_) => {
                    warn!("Ignoring unparseable year filter: {:?}", raw);
                    None
                }
            }
        });

        Self {
            maker: maker.and_then(constraint_value),
            model: model.and_then(constraint_value),
            vehicle_year,
        }
    }

    /// Set the maker constraint
    pub fn with_maker(mut self, maker: impl Into<String>) -> Self {
        self.maker = Some(maker.into());
        self
    }

    /// Set the model constraint
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the vehicle-year constraint
    pub fn with_vehicle_year(mut self, year: i32) -> Self {
        self.vehicle_year = Some(year);
        self
    }

    /// True when no criterion is set
    pub fn is_unconstrained(&self) -> bool {
        self.maker.is_none() && self.model.is_none() && self.vehicle_year.is_none()
    }

    /// Whether a record satisfies every present criterion
    pub fn matches(&self, record: &RecallRecord) -> bool {
        if let Some(maker) = &self.maker {
            if record.maker != *maker {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if record.model != *model {
                return false;
            }
        }
        if let Some(year) = self.vehicle_year {
            if record.vehicle_year != year {
                return false;
            }
        }
        true
    }

    /// Combine two criteria sets; criteria present in `other` win.
    pub fn merge(&self, other: &FilterCriteria) -> FilterCriteria {
        FilterCriteria {
            maker: other.maker.clone().or_else(|| self.maker.clone()),
            model: other.model.clone().or_else(|| self.model.clone()),
            vehicle_year: other.vehicle_year.or(self.vehicle_year),
        }
    }
}

fn is_unset(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL)
}

fn constraint_value(value: &str) -> Option<String> {
    if is_unset(value.trim()) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Select the records matching `criteria`, preserving input order.
///
/// The result is a fresh owned sequence; the input is never mutated and an
/// empty result is not an error.
pub fn select(records: &[RecallRecord], criteria: &FilterCriteria) -> Vec<RecallRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
