use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use calamine::{Data, Reader, Xlsx};

use super::aggregate::parse_date;
use super::error::{DataError, Result};
use super::model::{CellValue, Row, Table};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode an in-memory payload into a [`Table`]. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-separated text with a header row
/// * `.xlsx` – first worksheet of an Excel workbook, first row as headers
///
/// Anything else fails with [`DataError::UnsupportedFormat`]. No schema is
/// enforced; column names come from the header row and cell types are
/// inferred per cell.
pub fn load_bytes(bytes: &[u8], filename: &str) -> Result<Table> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(bytes),
        "xlsx" => load_xlsx(bytes),
        _ => Err(DataError::UnsupportedFormat { extension: ext }),
    }
}

/// Load a table from a file on disk (the File → Open… path).
pub fn load_file(path: &Path) -> anyhow::Result<Table> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    Ok(load_bytes(&bytes, filename)?)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per row.
/// Cells are typed by inference; empty cells become `Null`.
fn load_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Row::new();
        for (idx, name) in headers.iter().enumerate() {
            row.insert(name.clone(), guess_cell_type(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }
    Ok(Table::from_rows(headers, rows))
}

/// Infer a cell's type from its text, the way a dataframe reader would.
/// Date-like strings stay strings here; coercion happens at aggregation.
fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// XLSX loader
// ---------------------------------------------------------------------------

/// Read the first worksheet of an Excel workbook. The first row supplies
/// the column names; native cell types are mapped onto [`CellValue`], with
/// Excel datetimes landing as calendar dates.
fn load_xlsx(bytes: &[u8]) -> Result<Table> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(Table::from_rows(Vec::new(), Vec::new()));
    };
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(header_row) => header_row.iter().map(header_text).collect(),
        None => return Ok(Table::from_rows(Vec::new(), Vec::new())),
    };

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        let mut row = Row::new();
        for (idx, name) in headers.iter().enumerate() {
            let value = sheet_row
                .get(idx)
                .map(excel_cell_value)
                .unwrap_or(CellValue::Null);
            row.insert(name.clone(), value);
        }
        rows.push(row);
    }
    Ok(Table::from_rows(headers, rows))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a calamine cell onto a [`CellValue`].
fn excel_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) if s.trim().is_empty() => CellValue::Null,
        Data::String(s) => CellValue::String(s.trim().to_string()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Date(ndt.date()),
            None => CellValue::Null,
        },
        Data::DateTimeIso(s) => match parse_date(s) {
            Some(d) => CellValue::Date(d),
            None => CellValue::String(s.clone()),
        },
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALES_CSV: &[u8] = b"Region,Category,Sales,Date\n\
        East,A,10,2024-01-01\n\
        East,B,5,2024-01-02\n\
        West,A,7.5,2024-01-02\n\
        North,,true,\n";

    #[test]
    fn csv_headers_keep_source_order() {
        let table = load_bytes(SALES_CSV, "sales.csv").unwrap();
        assert_eq!(table.column_names, ["Region", "Category", "Sales", "Date"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn csv_cells_are_type_inferred() {
        let table = load_bytes(SALES_CSV, "sales.csv").unwrap();
        assert_eq!(table.rows[0]["Sales"], CellValue::Integer(10));
        assert_eq!(table.rows[2]["Sales"], CellValue::Float(7.5));
        assert_eq!(table.rows[3]["Sales"], CellValue::Bool(true));
        assert_eq!(table.rows[0]["Region"], CellValue::String("East".into()));
        // Date-like text stays textual until aggregation coerces it.
        assert_eq!(
            table.rows[0]["Date"],
            CellValue::String("2024-01-01".into())
        );
    }

    #[test]
    fn empty_cells_become_null() {
        let table = load_bytes(SALES_CSV, "sales.csv").unwrap();
        assert_eq!(table.rows[3]["Category"], CellValue::Null);
        assert_eq!(table.rows[3]["Date"], CellValue::Null);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_bytes(b"whatever", "report.txt").unwrap_err();
        assert!(matches!(
            err,
            DataError::UnsupportedFormat { ref extension } if extension == "txt"
        ));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(load_bytes(SALES_CSV, "SALES.CSV").is_ok());
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(matches!(
            load_bytes(b"", "sales"),
            Err(DataError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn empty_csv_yields_empty_table() {
        let table = load_bytes(b"Region,Sales\n", "empty.csv").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_names, ["Region", "Sales"]);
    }
}
