use chrono::{Datelike, NaiveDate};
use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::aggregate::AggregatedSeries;
use crate::data::model::CellValue;

// ---------------------------------------------------------------------------
// Bar chart (sales by category / region)
// ---------------------------------------------------------------------------

/// Render a grouped-sum bar chart, one coloured bar per key.
pub fn bar_chart(ui: &mut Ui, id: &str, series: &AggregatedSeries) {
    let colors = ColorMap::new(series.rows.iter().map(|(key, _)| key));

    let bars: Vec<Bar> = series
        .rows
        .iter()
        .enumerate()
        .map(|(i, (key, sum))| {
            Bar::new(i as f64, *sum)
                .name(key.to_string())
                .fill(colors.color_for(key))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = series.rows.iter().map(|(key, _)| key.to_string()).collect();

    Plot::new(id.to_string())
        .height(220.0)
        .y_axis_label(series.value_column.clone())
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Time series line chart (sales over time)
// ---------------------------------------------------------------------------

/// Render the sales-over-time line. The series is already ascending by
/// date, so the line draws left to right.
pub fn time_series_chart(ui: &mut Ui, id: &str, series: &AggregatedSeries) {
    let points: PlotPoints = series
        .rows
        .iter()
        .filter_map(|(key, sum)| match key {
            CellValue::Date(d) => Some([d.num_days_from_ce() as f64, *sum]),
            _ => None,
        })
        .collect();

    Plot::new(id.to_string())
        .height(240.0)
        .y_axis_label(series.value_column.clone())
        .allow_scroll(false)
        .x_axis_formatter(|mark, _range| day_label(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name(&series.value_column)
                    .width(1.5),
            );
        });
}

/// Label a day-number axis mark as a calendar date.
fn day_label(value: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
