use std::collections::BTreeSet;

use crate::data::filter::{apply_filters, FilterState};
use crate::data::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Columns that get a multiselect filter widget when the table has them.
pub const FILTER_COLUMNS: &[&str] = &["Region", "Category"];

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until the user opens a file). Immutable after
    /// load; filtering derives new tables from it.
    pub table: Option<Table>,

    /// Per-column filter selections. An empty set means "no filter".
    pub filters: FilterState,

    /// The loaded table narrowed by the current filters (cached).
    pub filtered: Option<Table>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            filters: FilterState::default(),
            filtered: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, resetting filters and caches.
    pub fn set_table(&mut self, table: Table) {
        self.filters = FilterState::default();
        self.filtered = Some(table.clone());
        self.table = Some(table);
        self.status_message = None;
    }

    /// Recompute the filtered table after a filter change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.filtered = Some(apply_filters(table, &self.filters));
        }
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: &str, value: &CellValue) {
        let selected = self.filters.entry(column.to_string()).or_default();
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select all values in a column (equivalent to no filter, but shown
    /// as every checkbox ticked).
    pub fn select_all(&mut self, column: &str) {
        if let Some(table) = &self.table {
            if let Some(all_vals) = table.unique_values.get(column) {
                self.filters.insert(column.to_string(), all_vals.clone());
                self.refilter();
            }
        }
    }

    /// Clear a column's selection, removing its constraint.
    pub fn clear_filter(&mut self, column: &str) {
        self.filters.insert(column.to_string(), BTreeSet::new());
        self.refilter();
    }
}
