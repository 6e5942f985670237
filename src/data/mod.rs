/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .xlsx
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Row>, column index
///   └──────────┘
///        │
///        ├───────────────┬───────────────┐
///        ▼               ▼               ▼
///   ┌──────────┐   ┌──────────┐   ┌───────────┐
///   │  filter   │   │  stats    │   │ aggregate  │
///   └──────────┘   └──────────┘   └───────────┘
///   narrowed Table  ColumnSummary   AggregatedSeries
/// ```
///
/// Everything here is pure and synchronous: each operation takes a table
/// and returns a fresh value, so a failed interaction never corrupts the
/// loaded dataset.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
