//! Insert, get and scan throughput charts.
//!
//! Both charts collapse repeated data sizes to their first row before
//! plotting.

use super::axis::{Scale, TickFormat};
use super::layout::{AxisSpec, ChartLayout, SeriesLayout};
use super::style::{SeriesStyle, GET, INSERT, SCAN};
use crate::models::{OperationsRow, ResultTable};
use crate::Result;

pub const STACKED_TITLE: &str = "Throughput Over Time (Insert, Get, and Scan Operations)";
pub const COMBINED_TITLE: &str = "All Operations Comparison (Throughput vs. Input data size)";

const LINEAR_X: AxisSpec = AxisSpec::new(Scale::Linear, TickFormat::DataSize);

struct Panel {
    title: &'static str,
    label: &'static str,
    short_label: &'static str,
    style: SeriesStyle,
    y_format: TickFormat,
    metric: fn(&OperationsRow) -> f64,
}

const PANELS: [Panel; 3] = [
    Panel {
        title: "Insert Operation (Throughput vs. Input data size)",
        label: "Insert Throughput",
        short_label: "Insert",
        style: INSERT,
        y_format: TickFormat::MillionsOrThousands,
        metric: |r| r.insert_throughput,
    },
    Panel {
        title: "Get Operation (Throughput vs. Input data size)",
        label: "Get Throughput",
        short_label: "Get",
        style: GET,
        y_format: TickFormat::Thousands,
        metric: |r| r.get_throughput,
    },
    Panel {
        title: "Scan Operation (Throughput vs. Input data size)",
        label: "Scan Throughput",
        short_label: "Scan",
        style: SCAN,
        y_format: TickFormat::Thousands,
        metric: |r| r.scan_throughput,
    },
];

/// One linear panel per operation, top to bottom: insert, get, scan
pub fn operations_panel_layouts(table: &ResultTable<OperationsRow>) -> Result<Vec<ChartLayout>> {
    let table = table.deduplicated();
    PANELS
        .iter()
        .map(|panel| {
            ChartLayout::resolve(
                panel.title,
                table.source(),
                LINEAR_X,
                AxisSpec::new(Scale::Linear, panel.y_format),
                vec![SeriesLayout::new(
                    panel.label,
                    panel.style,
                    table.series(panel.metric),
                )],
            )
        })
        .collect()
}

/// All three operations on one log-scale y axis
pub fn operations_combined_layout(table: &ResultTable<OperationsRow>) -> Result<ChartLayout> {
    let table = table.deduplicated();
    let series = PANELS
        .iter()
        .map(|panel| SeriesLayout::new(panel.short_label, panel.style, table.series(panel.metric)))
        .collect();

    ChartLayout::resolve(
        COMBINED_TITLE,
        table.source(),
        LINEAR_X,
        AxisSpec::new(Scale::Log, TickFormat::Compact),
        series,
    )
}
