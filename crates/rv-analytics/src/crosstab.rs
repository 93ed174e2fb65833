//! Cross-tabulation matrices for the heatmap panels

use ahash::AHashMap;
use indexmap::IndexSet;
use serde::Serialize;

use rv_core::RecallRecord;

/// Dense row × column matrix over the label universes observed in the
/// input.
///
/// Labels are the distinct values actually present in the record slice,
/// never a static catalog, so the matrix shrinks and grows with the active
/// filter. Combinations absent from the data hold 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrossTab {
    /// Row labels, in first-seen order unless re-sorted
    pub rows: Vec<String>,

    /// Column labels, in first-seen order
    pub cols: Vec<String>,

    /// `cells[row][col]`; counts are whole-valued
    pub cells: Vec<Vec<f64>>,
}

impl CrossTab {
    /// Count records per (row, col) pair
    pub fn counts<R, C>(records: &[RecallRecord], row_fn: R, col_fn: C) -> Self
    where
        R: Fn(&RecallRecord) -> String,
        C: Fn(&RecallRecord) -> String,
    {
        Self::build(records, row_fn, col_fn, |_| 1.0)
    }

    /// Sum `value_fn` per (row, col) pair
    pub fn sums<R, C, V>(records: &[RecallRecord], row_fn: R, col_fn: C, value_fn: V) -> Self
    where
        R: Fn(&RecallRecord) -> String,
        C: Fn(&RecallRecord) -> String,
        V: Fn(&RecallRecord) -> f64,
    {
        Self::build(records, row_fn, col_fn, value_fn)
    }

    fn build<R, C, V>(records: &[RecallRecord], row_fn: R, col_fn: C, value_fn: V) -> Self
    where
        R: Fn(&RecallRecord) -> String,
        C: Fn(&RecallRecord) -> String,
        V: Fn(&RecallRecord) -> f64,
    {
        let mut row_labels: IndexSet<String> = IndexSet::new();
        let mut col_labels: IndexSet<String> = IndexSet::new();
        let mut totals: AHashMap<(usize, usize), f64> = AHashMap::new();

        for record in records {
            let (row, _) = row_labels.insert_full(row_fn(record));
            let (col, _) = col_labels.insert_full(col_fn(record));
            *totals.entry((row, col)).or_insert(0.0) += value_fn(record);
        }

        let cells = (0..row_labels.len())
            .map(|row| {
                (0..col_labels.len())
                    .map(|col| totals.get(&(row, col)).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Self {
            rows: row_labels.into_iter().collect(),
            cols: col_labels.into_iter().collect(),
            cells,
        }
    }

    /// Value at a (row, col) label pair, `None` when either label is absent
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let row = self.rows.iter().position(|label| label == row)?;
        let col = self.cols.iter().position(|label| label == col)?;
        Some(self.cells[row][col])
    }

    /// True when the input held no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten into (row index, col index, value) triples, the layout
    /// heatmap renderers consume
    pub fn triples(&self) -> Vec<(usize, usize, f64)> {
        let mut triples = Vec::with_capacity(self.rows.len() * self.cols.len());
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                triples.push((row, col, *value));
            }
        }
        triples
    }

    /// Re-order rows (labels and cells together) by a label comparator
    pub fn sort_rows_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&str, &str) -> std::cmp::Ordering,
    {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| compare(&self.rows[a], &self.rows[b]));

        self.rows = order.iter().map(|&index| self.rows[index].clone()).collect();
        self.cells = order.iter().map(|&index| self.cells[index].clone()).collect();
    }
}

/// Record counts per component × recall type
pub fn component_type_counts(records: &[RecallRecord]) -> CrossTab {
    CrossTab::counts(
        records,
        |record| record.component.clone(),
        |record| record.recall_type.clone(),
    )
}

/// Summed affected units per component × recall type
pub fn component_type_units(records: &[RecallRecord]) -> CrossTab {
    CrossTab::sums(
        records,
        |record| record.component.clone(),
        |record| record.recall_type.clone(),
        |record| record.potential_units_affected,
    )
}

/// Record counts per vehicle model year × component, years ascending
pub fn year_component_counts(records: &[RecallRecord]) -> CrossTab {
    let mut tab = CrossTab::counts(
        records,
        |record| record.vehicle_year.to_string(),
        |record| record.component.clone(),
    );
    tab.sort_rows_by(|a, b| match (a.parse::<i32>(), b.parse::<i32>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        _ => a.cmp(b),
    });
    tab
}
