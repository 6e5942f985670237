use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Table;
use crate::data::stats::ColumnSummary;

// ---------------------------------------------------------------------------
// Preview and statistics grids
// ---------------------------------------------------------------------------

/// Number of rows shown in the data preview.
pub const PREVIEW_ROWS: usize = 5;

/// Render the first rows of the table as a striped grid.
pub fn preview_table(ui: &mut Ui, table: &Table) {
    let preview = table.head(PREVIEW_ROWS);

    ui.push_id("preview_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), table.column_names.len())
            .header(20.0, |mut header| {
                for col in &table.column_names {
                    header.col(|ui| {
                        ui.strong(col);
                    });
                }
            })
            .body(|mut body| {
                for row in &preview.rows {
                    body.row(18.0, |mut out| {
                        for col in &table.column_names {
                            out.col(|ui| {
                                if let Some(val) = row.get(col) {
                                    ui.label(val.to_string());
                                }
                            });
                        }
                    });
                }
            });
    });
}

const STAT_HEADERS: &[&str] = &[
    "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
];

/// Render the per-column summary statistics as a grid.
pub fn stats_table(ui: &mut Ui, summaries: &[ColumnSummary]) {
    ui.push_id("stats_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), STAT_HEADERS.len())
            .header(20.0, |mut header| {
                for name in STAT_HEADERS {
                    header.col(|ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|mut body| {
                for s in summaries {
                    let cells = [
                        s.column.clone(),
                        s.count.to_string(),
                        fmt_stat(s.mean),
                        fmt_stat(s.std),
                        fmt_stat(s.min),
                        fmt_stat(s.q25),
                        fmt_stat(s.median),
                        fmt_stat(s.q75),
                        fmt_stat(s.max),
                    ];
                    body.row(18.0, |mut out| {
                        for cell in cells {
                            out.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "–".to_string()
    } else {
        format!("{v:.2}")
    }
}
