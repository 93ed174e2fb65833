//! Dataset sources

pub mod csv_source;
pub mod json_source;

pub use csv_source::CsvSource;
pub use json_source::JsonSource;

/// Column names used by the recall dataset, exactly as the source files
/// spell them.
pub(crate) mod columns {
    pub const MAKER: &str = "MAKER";
    pub const MODEL: &str = "MODEL";
    pub const VEHICLE_YEAR: &str = "VEHIC-YEAR";
    pub const COMPONENT: &str = "COMPONENT";
    pub const RECALL_TYPE: &str = "RECALL_TYPE";
    pub const RECALL_DATE: &str = "RECALL_DATE";
    pub const RECALL_YEAR: &str = "recall_year";
    pub const VEHICLE_AGE: &str = "vehicle_age_at_recall";
    pub const UNITS_AFFECTED: &str = "POTENTIAL_UNITS_AFFECTED_PRED";
    pub const DEFECT_SUMMARY: &str = "DEFECT_SUMMARY";
    pub const CONSEQ_SUMMARY: &str = "CONSEQ_SUMMARY";
    pub const CORRECTIVE_SUMMARY: &str = "CORRECTIVE_SUMMARY";
    pub const RECALL_NOTES: &str = "RECALL_NOTES";
    pub const FAIL_SUMMARY: &str = "FAIL_SUMMARY";
    pub const FAIL_DETAIL: &str = "FAIL_DETAIL";
}
