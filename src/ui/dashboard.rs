use eframe::egui::{Color32, RichText, ScrollArea, Ui};

use crate::data::aggregate::{aggregate_by_key, aggregate_time_series};
use crate::data::error::DataError;
use crate::data::stats::describe;
use crate::state::AppState;
use crate::ui::{charts, tables};

// ---------------------------------------------------------------------------
// Central panel – preview, statistics, charts
// ---------------------------------------------------------------------------

/// Render the central dashboard over the currently filtered table.
/// Charts whose required columns are absent are simply not drawn.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(filtered) = &state.filtered else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a sales file to get started  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Data Preview");
            tables::preview_table(ui, filtered);
            ui.add_space(12.0);

            let summaries = describe(filtered);
            if !summaries.is_empty() {
                ui.heading("Basic Statistics");
                tables::stats_table(ui, &summaries);
                ui.add_space(12.0);
            }

            ui.columns(2, |cols: &mut [Ui]| {
                if let Ok(series) = aggregate_by_key(filtered, "Category", "Sales") {
                    cols[0].heading("Sales by Category");
                    charts::bar_chart(&mut cols[0], "sales_by_category", &series);
                }
                if let Ok(series) = aggregate_by_key(filtered, "Region", "Sales") {
                    cols[1].heading("Sales by Region");
                    charts::bar_chart(&mut cols[1], "sales_by_region", &series);
                }
            });
            ui.add_space(12.0);

            match aggregate_time_series(filtered, "Date", "Sales") {
                Ok(series) if !series.rows.is_empty() => {
                    ui.heading("Sales Over Time");
                    ui.weak(format!("total {:.2}", series.total()));
                    charts::time_series_chart(ui, "sales_over_time", &series);
                }
                Ok(_) | Err(DataError::MissingColumn { .. }) => {}
                Err(e) => {
                    ui.heading("Sales Over Time");
                    ui.label(
                        RichText::new(format!("Chart unavailable: {e}")).color(Color32::RED),
                    );
                }
            }
        });
}
