//! Dashboard report assembly and rendering

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;

use rv_analytics::{
    bubble_points, component_type_counts, component_type_units, monthly_recall_trend,
    recalls_by_component, recalls_by_type, recalls_by_vehicle_year, recalls_by_year,
    units_by_recall_year, units_by_type_and_year, units_share_by_maker, year_component_counts,
    BubblePoint, CrossTab, DashboardSummary, ShareEntry,
};
use rv_core::{FilterCriteria, RecallRecord};
use rv_data::{FilterOptions, RecordStore};

/// Every derived structure the dashboard renders, computed for one filter
/// selection
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    /// Name of the dataset file the records came from
    pub source: String,

    /// The criteria this report was computed under
    pub criteria: FilterCriteria,

    /// Records matched by the criteria
    pub selected_records: usize,

    /// Records in the full store
    pub total_records: usize,

    /// Dropdown option lists, always from the unfiltered store
    pub filter_options: FilterOptions,

    pub summary: DashboardSummary,
    pub recalls_by_type: IndexMap<String, u64>,
    pub recalls_by_component: IndexMap<String, u64>,
    pub recalls_by_year: IndexMap<i32, u64>,
    pub recalls_by_vehicle_year: IndexMap<i32, u64>,
    pub monthly_trend: IndexMap<String, u64>,
    pub units_by_recall_year: IndexMap<i32, f64>,
    pub units_by_type_and_year: IndexMap<String, IndexMap<i32, f64>>,
    pub component_type_counts: CrossTab,
    pub component_type_units: CrossTab,
    pub year_component_counts: CrossTab,
    pub maker_unit_shares: IndexMap<String, ShareEntry>,
    pub bubble_points: Vec<BubblePoint>,
}

impl DashboardReport {
    /// Compute the full report for one selection
    pub fn build(
        store: &RecordStore,
        criteria: &FilterCriteria,
        records: &[RecallRecord],
    ) -> Self {
        Self {
            source: store.source_name().to_string(),
            criteria: criteria.clone(),
            selected_records: records.len(),
            total_records: store.len(),
            filter_options: store.filter_options(),
            summary: DashboardSummary::compute(records),
            recalls_by_type: recalls_by_type(records),
            recalls_by_component: recalls_by_component(records),
            recalls_by_year: recalls_by_year(records),
            recalls_by_vehicle_year: recalls_by_vehicle_year(records),
            monthly_trend: monthly_recall_trend(records),
            units_by_recall_year: units_by_recall_year(records),
            units_by_type_and_year: units_by_type_and_year(records),
            component_type_counts: component_type_counts(records),
            component_type_units: component_type_units(records),
            year_component_counts: year_component_counts(records),
            maker_unit_shares: units_share_by_maker(records),
            bubble_points: bubble_points(records),
        }
    }

    /// Render the report as a plain-text dashboard
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Recall dashboard — {}\n", self.source));
        out.push_str(&format!(
            "Filter: maker={}, model={}, year={}\n",
            option_label(self.criteria.maker.as_deref()),
            option_label(self.criteria.model.as_deref()),
            self.criteria
                .vehicle_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "(all)".to_string()),
        ));
        out.push_str(&format!(
            "Records selected: {} of {}\n\n",
            self.selected_records, self.total_records
        ));

        out.push_str("Summary\n");
        out.push_str(&format!(
            "  Total units affected:    {:.0}\n",
            self.summary.total_units_affected
        ));
        out.push_str(&format!(
            "  Average units affected:  {:.2}\n",
            self.summary.average_units_affected
        ));
        out.push_str(&format!(
            "  Most frequent component: {}\n",
            self.summary.most_frequent_component
        ));
        out.push_str(&format!(
            "  Most frequent type:      {}\n\n",
            self.summary.most_frequent_recall_type
        ));

        render_count_table(&mut out, "Recalls by type", &self.recalls_by_type);
        render_count_table(&mut out, "Recalls by component", &self.recalls_by_component);
        render_keyed_table(&mut out, "Recalls by recall year", &self.recalls_by_year);
        render_keyed_table(
            &mut out,
            "Recalls by vehicle year",
            &self.recalls_by_vehicle_year,
        );
        render_count_table(&mut out, "Monthly trend", &self.monthly_trend);

        out.push_str("Units affected by maker\n");
        if self.maker_unit_shares.is_empty() {
            out.push_str("  (no data)\n");
        }
        for (maker, entry) in &self.maker_unit_shares {
            out.push_str(&format!(
                "  {:<24} {:>14.0}  {:>6.2}%\n",
                maker, entry.value, entry.percentage
            ));
        }
        out.push('\n');

        render_matrix(
            &mut out,
            "Recall counts by component × type",
            &self.component_type_counts,
        );
        render_matrix(
            &mut out,
            "Affected units by component × type",
            &self.component_type_units,
        );
        render_matrix(
            &mut out,
            "Recall counts by vehicle year × component",
            &self.year_component_counts,
        );

        out.push_str(&format!(
            "Bubble points: {} (one per record; --json emits the full set)\n",
            self.bubble_points.len()
        ));

        out
    }
}

fn option_label(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(|| "(all)".to_string())
}

fn render_count_table(out: &mut String, title: &str, table: &IndexMap<String, u64>) {
    out.push_str(title);
    out.push('\n');
    if table.is_empty() {
        out.push_str("  (no data)\n");
    }
    for (key, count) in table {
        let _ = writeln!(out, "  {:<24} {:>10}", key, count);
    }
    out.push('\n');
}

fn render_keyed_table(out: &mut String, title: &str, table: &IndexMap<i32, u64>) {
    out.push_str(title);
    out.push('\n');
    if table.is_empty() {
        out.push_str("  (no data)\n");
    }
    for (key, count) in table {
        let _ = writeln!(out, "  {:<24} {:>10}", key, count);
    }
    out.push('\n');
}

fn render_matrix(out: &mut String, title: &str, tab: &CrossTab) {
    out.push_str(title);
    out.push('\n');
    if tab.is_empty() {
        out.push_str("  (no data)\n\n");
        return;
    }

    let _ = writeln!(out, "  columns: {}", tab.cols.join(", "));
    for (row, cells) in tab.rows.iter().zip(&tab.cells) {
        let rendered: Vec<String> = cells.iter().map(|value| format!("{:.0}", value)).collect();
        let _ = writeln!(out, "  {:<24} {}", row, rendered.join("  "));
    }
    out.push('\n');
}
