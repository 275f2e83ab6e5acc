//! Series colours, markers and text sizes shared by all charts.

use plotters::style::RGBColor;

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_FONT_SIZE: u32 = 22;
pub const SUPTITLE_FONT_SIZE: u32 = 26;
pub const AXIS_DESC_FONT_SIZE: u32 = 17;
pub const TICK_FONT_SIZE: u32 = 14;
pub const LEGEND_FONT_SIZE: u32 = 15;

pub const LINE_WIDTH: u32 = 2;
pub const LEGEND_LINE_LENGTH: i32 = 20;

pub const X_DESC: &str = "Input Data Size (MB)";
pub const Y_DESC: &str = "Throughput (ops/sec)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Square,
    Circle,
    Triangle,
}

/// How one series is drawn
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub color: RGBColor,
    pub marker: Marker,
    /// Marker radius in pixels
    pub marker_size: i32,
}

pub const BINARY_SEARCH: SeriesStyle = SeriesStyle {
    color: RGBColor(0x1f, 0x77, 0xb4),
    marker: Marker::Square,
    marker_size: 5,
};

pub const BTREE_SEARCH: SeriesStyle = SeriesStyle {
    color: RGBColor(0xff, 0x7f, 0x0e),
    marker: Marker::Circle,
    marker_size: 5,
};

pub const INSERT: SeriesStyle = SeriesStyle {
    color: RGBColor(0x2c, 0xa0, 0x2c),
    marker: Marker::Square,
    marker_size: 4,
};

pub const GET: SeriesStyle = SeriesStyle {
    color: RGBColor(0xd6, 0x27, 0x28),
    marker: Marker::Circle,
    marker_size: 4,
};

pub const SCAN: SeriesStyle = SeriesStyle {
    color: RGBColor(0x94, 0x67, 0xbd),
    marker: Marker::Triangle,
    marker_size: 5,
};
