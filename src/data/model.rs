use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
/// Using `BTreeMap` / `BTreeSet` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
                Date(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Date(d) => d.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.2}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for summing and statistics.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row / Table – the loaded dataset
// ---------------------------------------------------------------------------

/// A single row: column name → cell value. Every row carries every header
/// column; empty cells are `Null`.
pub type Row = BTreeMap<String, CellValue>;

/// The full parsed dataset with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct Table {
    /// All rows.
    pub rows: Vec<Row>,
    /// Column names in source header order.
    pub column_names: Vec<String>,
    /// For each column the sorted set of distinct values.
    pub unique_values: BTreeMap<String, BTreeSet<CellValue>>,
}

impl Table {
    /// Build a table from rows, recomputing the distinct-value index.
    pub fn from_rows(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        let mut unique_values: BTreeMap<String, BTreeSet<CellValue>> = column_names
            .iter()
            .map(|col| (col.clone(), BTreeSet::new()))
            .collect();

        for row in &rows {
            for (col, val) in row {
                if let Some(set) = unique_values.get_mut(col) {
                    set.insert(val.clone());
                }
            }
        }
        Table {
            rows,
            column_names,
            unique_values,
        }
    }

    /// Whether a column of this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    /// The first `n` rows as a new table (the data preview).
    pub fn head(&self, n: usize) -> Table {
        Table::from_rows(
            self.column_names.clone(),
            self.rows.iter().take(n).cloned().collect(),
        )
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let rows = vec![
            Row::from([
                ("Region".to_string(), CellValue::String("East".into())),
                ("Sales".to_string(), CellValue::Integer(10)),
            ]),
            Row::from([
                ("Region".to_string(), CellValue::String("West".into())),
                ("Sales".to_string(), CellValue::Integer(7)),
            ]),
            Row::from([
                ("Region".to_string(), CellValue::String("East".into())),
                ("Sales".to_string(), CellValue::Null),
            ]),
        ];
        Table::from_rows(vec!["Region".to_string(), "Sales".to_string()], rows)
    }

    #[test]
    fn unique_values_are_indexed_per_column() {
        let table = sample();
        let regions = &table.unique_values["Region"];
        assert_eq!(regions.len(), 2);
        assert!(regions.contains(&CellValue::String("East".into())));
        assert!(regions.contains(&CellValue::String("West".into())));
        assert!(table.unique_values["Sales"].contains(&CellValue::Null));
    }

    #[test]
    fn head_returns_first_rows_and_keeps_columns() {
        let table = sample();
        let preview = table.head(2);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview.column_names, table.column_names);
        assert_eq!(preview.rows[0]["Region"], CellValue::String("East".into()));
    }

    #[test]
    fn head_of_empty_table_is_empty() {
        let empty = Table::from_rows(vec!["A".to_string()], Vec::new());
        assert!(empty.head(5).is_empty());
    }

    #[test]
    fn head_is_clamped_to_row_count() {
        let table = sample();
        assert_eq!(table.head(100).len(), 3);
    }

    #[test]
    fn cell_values_order_within_type() {
        assert!(CellValue::String("East".into()) < CellValue::String("West".into()));
        assert!(CellValue::Integer(5) < CellValue::Integer(10));
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert!(CellValue::Date(jan) < CellValue::Date(feb));
    }
}
