use std::collections::{BTreeMap, BTreeSet};

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Filter predicate: which values are allowed per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column_name → set of allowed values.
/// If a column is absent or its set is empty, it means "no filter" (show all).
pub type FilterState = BTreeMap<String, BTreeSet<CellValue>>;

/// Narrow a table to the rows passing all active filters.
///
/// A row passes a column filter when:
/// * The filter set for that column is empty → passes (no constraint)
/// * The filter names a column the table does not have → entry is ignored
/// * The row's value for that column is in the allowed set → passes
///
/// Filters compose by logical AND across columns. The input table is left
/// untouched; the surviving rows come back as a new table with the same
/// columns.
pub fn apply_filters(table: &Table, filters: &FilterState) -> Table {
    let active: Vec<(&String, &BTreeSet<CellValue>)> = filters
        .iter()
        .filter(|(col, allowed)| !allowed.is_empty() && table.has_column(col))
        .collect();

    let rows = table
        .rows
        .iter()
        .filter(|row| {
            active.iter().all(|(col, allowed)| match row.get(*col) {
                Some(val) => allowed.contains(val),
                None => false,
            })
        })
        .cloned()
        .collect();

    Table::from_rows(table.column_names.clone(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn row(region: &str, category: &str, sales: i64) -> Row {
        Row::from([
            ("Region".to_string(), CellValue::String(region.into())),
            ("Category".to_string(), CellValue::String(category.into())),
            ("Sales".to_string(), CellValue::Integer(sales)),
        ])
    }

    fn sales_table() -> Table {
        Table::from_rows(
            vec![
                "Region".to_string(),
                "Category".to_string(),
                "Sales".to_string(),
            ],
            vec![row("East", "A", 10), row("East", "B", 5), row("West", "A", 7)],
        )
    }

    fn allow(values: &[&str]) -> BTreeSet<CellValue> {
        values
            .iter()
            .map(|v| CellValue::String((*v).into()))
            .collect()
    }

    #[test]
    fn empty_selection_is_identity() {
        let table = sales_table();
        let filtered = apply_filters(&table, &FilterState::new());
        assert_eq!(filtered.len(), table.len());
        assert_eq!(filtered.rows, table.rows);

        let mut explicit_empty = FilterState::new();
        explicit_empty.insert("Region".to_string(), BTreeSet::new());
        assert_eq!(apply_filters(&table, &explicit_empty).len(), table.len());
    }

    #[test]
    fn region_filter_keeps_matching_rows() {
        let table = sales_table();
        let mut filters = FilterState::new();
        filters.insert("Region".to_string(), allow(&["East"]));

        let filtered = apply_filters(&table, &filters);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.rows, table.rows[..2]);
    }

    #[test]
    fn filters_compose_with_logical_and() {
        let table = sales_table();
        let mut filters = FilterState::new();
        filters.insert("Region".to_string(), allow(&["East"]));
        filters.insert("Category".to_string(), allow(&["B"]));

        let filtered = apply_filters(&table, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows[0]["Sales"], CellValue::Integer(5));
    }

    #[test]
    fn unknown_column_is_silently_ignored() {
        let table = sales_table();
        let mut filters = FilterState::new();
        filters.insert("Warehouse".to_string(), allow(&["Lisbon"]));

        assert_eq!(apply_filters(&table, &filters).len(), table.len());
    }

    #[test]
    fn result_is_a_subset_and_never_widens() {
        let table = sales_table();
        let mut filters = FilterState::new();
        filters.insert("Region".to_string(), allow(&["East", "West", "South"]));

        let filtered = apply_filters(&table, &filters);
        assert!(filtered.len() <= table.len());
        assert_eq!(filtered.column_names, table.column_names);
        for row in &filtered.rows {
            assert!(table.rows.contains(row));
        }
    }

    #[test]
    fn no_match_yields_empty_table() {
        let table = sales_table();
        let mut filters = FilterState::new();
        filters.insert("Region".to_string(), allow(&["South"]));

        let filtered = apply_filters(&table, &filters);
        assert!(filtered.is_empty());
        assert_eq!(filtered.column_names, table.column_names);
    }
}
