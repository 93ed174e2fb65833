//! Derived summaries for the recall analytics dashboard
//!
//! Every function in this crate is a pure, single-pass reduction over a
//! record slice: filter first with `rv_core::select`, then hand the result
//! to whichever derivation a panel needs. Empty input always yields a
//! well-defined neutral value, never an error.

pub mod crosstab;
pub mod grouping;
pub mod series;
pub mod share;
pub mod summary;

// Re-export commonly used types
pub use crosstab::{component_type_counts, component_type_units, year_component_counts, CrossTab};
pub use grouping::{
    counts_by_key, recalls_by_component, recalls_by_type, recalls_by_vehicle_year,
    recalls_by_year, sum_by_key, sum_by_two_keys, units_by_type_and_year,
};
pub use series::{bubble_points, monthly_recall_trend, units_by_recall_year, BubblePoint};
pub use share::{share_of_total, units_share_by_maker, ShareEntry};
pub use summary::{
    average_units_affected, most_frequent_component, most_frequent_recall_type,
    total_units_affected, DashboardSummary, NO_DATA,
};
