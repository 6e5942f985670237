use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Descriptive statistics (the "Basic Statistics" panel)
// ---------------------------------------------------------------------------

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1); NaN when fewer than two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarise every numeric column of the table.
///
/// A column counts as numeric when it has at least one non-null cell and
/// all of its non-null cells are integers or floats. A table with no
/// numeric columns yields an empty vector, not an error.
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table
        .column_names
        .iter()
        .filter_map(|col| numeric_column(table, col).map(|values| summarize(col, values)))
        .collect()
}

/// Collect a column's non-null values as floats, or `None` if the column
/// holds anything non-numeric (or nothing at all).
fn numeric_column(table: &Table, col: &str) -> Option<Vec<f64>> {
    let mut values = Vec::new();
    for row in &table.rows {
        match row.get(col) {
            Some(CellValue::Null) | None => continue,
            Some(cell) => values.push(cell.as_f64()?),
        }
    }
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn summarize(column: &str, mut values: Vec<f64>) -> ColumnSummary {
    values.sort_by(f64::total_cmp);
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = if n < 2 {
        f64::NAN
    } else {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    };

    ColumnSummary {
        column: column.to_string(),
        count: n,
        mean,
        std,
        min: values[0],
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values[n - 1],
    }
}

/// Quantile by linear interpolation over the sorted values.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn table_of(columns: &[&str], rows: Vec<Row>) -> Table {
        Table::from_rows(columns.iter().map(|c| c.to_string()).collect(), rows)
    }

    fn numeric_rows(values: &[i64]) -> Vec<Row> {
        values
            .iter()
            .map(|v| Row::from([("Sales".to_string(), CellValue::Integer(*v))]))
            .collect()
    }

    #[test]
    fn describes_a_numeric_column() {
        let table = table_of(&["Sales"], numeric_rows(&[1, 2, 3, 4]));
        let summaries = describe(&table);
        assert_eq!(summaries.len(), 1);

        let s = &summaries[0];
        assert_eq!(s.column, "Sales");
        assert_eq!(s.count, 4);
        assert!((s.mean - 2.5).abs() < 1e-12);
        assert!((s.min - 1.0).abs() < 1e-12);
        assert!((s.max - 4.0).abs() < 1e-12);
        // Linear interpolation between sorted neighbours.
        assert!((s.q25 - 1.75).abs() < 1e-12);
        assert!((s.median - 2.5).abs() < 1e-12);
        assert!((s.q75 - 3.25).abs() < 1e-12);
        // Sample std of 1..4 is sqrt(5/3).
        assert!((s.std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn non_numeric_columns_are_excluded() {
        let rows = vec![
            Row::from([
                ("Region".to_string(), CellValue::String("East".into())),
                ("Sales".to_string(), CellValue::Integer(10)),
            ]),
            Row::from([
                ("Region".to_string(), CellValue::String("West".into())),
                ("Sales".to_string(), CellValue::Integer(7)),
            ]),
        ];
        let table = table_of(&["Region", "Sales"], rows);
        let summaries = describe(&table);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].column, "Sales");
    }

    #[test]
    fn table_without_numeric_columns_yields_empty_result() {
        let rows = vec![Row::from([(
            "Region".to_string(),
            CellValue::String("East".into()),
        )])];
        assert!(describe(&table_of(&["Region"], rows)).is_empty());
        assert!(describe(&table_of(&["Region"], Vec::new())).is_empty());
    }

    #[test]
    fn null_cells_are_skipped_in_the_count() {
        let mut rows = numeric_rows(&[5, 15]);
        rows.push(Row::from([("Sales".to_string(), CellValue::Null)]));
        let table = table_of(&["Sales"], rows);

        let summaries = describe(&table);
        let s = &summaries[0];
        assert_eq!(s.count, 2);
        assert!((s.mean - 10.0).abs() < 1e-12);
    }

    #[test]
    fn single_value_column_has_nan_std() {
        let table = table_of(&["Sales"], numeric_rows(&[42]));
        let summaries = describe(&table);
        let s = &summaries[0];
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert!((s.median - 42.0).abs() < 1e-12);
    }

    #[test]
    fn mixed_text_and_number_column_is_not_numeric() {
        let rows = vec![
            Row::from([("Code".to_string(), CellValue::Integer(12))]),
            Row::from([("Code".to_string(), CellValue::String("abc".into()))]),
        ];
        assert!(describe(&table_of(&["Code"], rows)).is_empty());
    }
}
