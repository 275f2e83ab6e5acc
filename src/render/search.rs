//! Binary search vs. B-tree search throughput chart.

use super::axis::{Scale, TickFormat};
use super::layout::{AxisSpec, ChartLayout, SeriesLayout};
use super::style::{BINARY_SEARCH, BTREE_SEARCH};
use crate::models::{ResultTable, SearchComparisonRow};
use crate::Result;

pub const TITLE: &str = "Search Operation Comparison (Throughput vs. Input data size)";
pub const BINARY_LABEL: &str = "Binary Search";
pub const BTREE_LABEL: &str = "B-Tree Search";

/// Log-log layout with one tick per measured data size
pub fn search_comparison_layout(table: &ResultTable<SearchComparisonRow>) -> Result<ChartLayout> {
    let series = vec![
        SeriesLayout::new(
            BINARY_LABEL,
            BINARY_SEARCH,
            table.series(|r| r.binary_search_throughput),
        ),
        SeriesLayout::new(
            BTREE_LABEL,
            BTREE_SEARCH,
            table.series(|r| r.btree_search_throughput),
        ),
    ];

    ChartLayout::resolve(
        TITLE,
        table.source(),
        AxisSpec::new(Scale::Log, TickFormat::DataSize),
        AxisSpec::new(Scale::Log, TickFormat::Magnitude),
        series,
    )
}
