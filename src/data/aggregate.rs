use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::error::{DataError, Result};
use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Group-by-sum aggregation (feeds the bar and line charts)
// ---------------------------------------------------------------------------

/// A (key, sum) series produced by a group-by-sum over the table.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedSeries {
    pub key_column: String,
    pub value_column: String,
    /// One row per distinct key, paired with the group's summed value.
    pub rows: Vec<(CellValue, f64)>,
}

impl AggregatedSeries {
    /// Sum of the value column across all groups.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|(_, v)| v).sum()
    }
}

fn require_column(table: &Table, name: &str) -> Result<()> {
    if table.has_column(name) {
        Ok(())
    } else {
        Err(DataError::MissingColumn {
            name: name.to_string(),
        })
    }
}

/// Group rows by `key_column` and sum `value_column` within each group.
///
/// Output rows are ordered by the total order on [`CellValue`], i.e. the
/// lexical order of the key domain. Rows with a null key are dropped, and
/// value cells that are not numeric contribute nothing to their group's
/// sum.
pub fn aggregate_by_key(
    table: &Table,
    key_column: &str,
    value_column: &str,
) -> Result<AggregatedSeries> {
    require_column(table, key_column)?;
    require_column(table, value_column)?;

    let mut groups: BTreeMap<CellValue, f64> = BTreeMap::new();
    for row in &table.rows {
        let key = match row.get(key_column) {
            Some(CellValue::Null) | None => continue,
            Some(key) => key.clone(),
        };
        let sum = groups.entry(key).or_insert(0.0);
        if let Some(v) = row.get(value_column).and_then(CellValue::as_f64) {
            *sum += v;
        }
    }

    Ok(AggregatedSeries {
        key_column: key_column.to_string(),
        value_column: value_column.to_string(),
        rows: groups.into_iter().collect(),
    })
}

/// Group by a date column and sum `value_column`, ascending by date.
///
/// Date cells are coerced first: native dates pass through, strings are
/// parsed against the recognized formats, anything else fails with
/// [`DataError::InvalidDate`]. Rows with a null date cell are dropped.
pub fn aggregate_time_series(
    table: &Table,
    date_column: &str,
    value_column: &str,
) -> Result<AggregatedSeries> {
    require_column(table, date_column)?;
    require_column(table, value_column)?;

    let mut groups: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in &table.rows {
        let date = match row.get(date_column) {
            Some(CellValue::Null) | None => continue,
            Some(cell) => coerce_date(cell)?,
        };
        let sum = groups.entry(date).or_insert(0.0);
        if let Some(v) = row.get(value_column).and_then(CellValue::as_f64) {
            *sum += v;
        }
    }

    Ok(AggregatedSeries {
        key_column: date_column.to_string(),
        value_column: value_column.to_string(),
        rows: groups
            .into_iter()
            .map(|(d, v)| (CellValue::Date(d), v))
            .collect(),
    })
}

// ---------------------------------------------------------------------------
// Date coercion
// ---------------------------------------------------------------------------

/// Textual date formats accepted by the coercion.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

fn coerce_date(cell: &CellValue) -> Result<NaiveDate> {
    match cell {
        CellValue::Date(d) => Ok(*d),
        CellValue::String(s) => parse_date(s).ok_or_else(|| DataError::InvalidDate {
            value: s.clone(),
        }),
        other => Err(DataError::InvalidDate {
            value: other.to_string(),
        }),
    }
}

/// Parse a date-like string against the recognized formats, falling back
/// to the date prefix of an ISO-8601 datetime ("2024-01-05T13:00:00").
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
