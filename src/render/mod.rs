//! Chart rendering module
//!
//! Each rendering operation resolves one or more [`ChartLayout`]s from a
//! result table and draws them into a PNG. Re-running an operation on the
//! same table overwrites its output with identical bytes.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Instant;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::models::{OperationsRow, ResultTable, SearchComparisonRow};
use crate::{KvPlotError, Result};

pub mod axis;
pub mod coord;
pub mod fonts;
pub mod layout;
pub mod legend;
pub mod operations;
pub mod search;
pub mod style;

pub use layout::{ChartLayout, SeriesLayout};
pub use operations::{operations_combined_layout, operations_panel_layouts};
pub use search::search_comparison_layout;

use coord::TickedAxis;
use style::{Marker, SeriesStyle};

/// Renders the report charts described by a [`ReportConfig`]
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    config: ReportConfig,
}

impl ReportRenderer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Binary vs. B-tree search throughput on log-log axes
    pub fn render_search_comparison(
        &self,
        table: &ResultTable<SearchComparisonRow>,
    ) -> Result<PathBuf> {
        let layout = search_comparison_layout(table)?;
        let output = self.config.search_output_path();
        self.render_to(&output, self.config.chart_size, |root| draw_chart(root, &layout))?;
        Ok(output)
    }

    /// Insert, get and scan throughput as three stacked linear charts
    pub fn render_operations_over_time(
        &self,
        table: &ResultTable<OperationsRow>,
    ) -> Result<PathBuf> {
        let panels = operations_panel_layouts(table)?;
        let output = self.config.operations_output_path();
        self.render_to(&output, self.config.stacked_size, |root| {
            let titled = root
                .titled(
                    operations::STACKED_TITLE,
                    (style::FONT_FAMILY, style::SUPTITLE_FONT_SIZE)
                        .into_font()
                        .style(FontStyle::Bold),
                )
                .map_err(render_err)?;
            let areas = titled.split_evenly((panels.len(), 1));
            for (area, panel) in areas.iter().zip(&panels) {
                draw_chart(area, panel)?;
            }
            Ok(())
        })?;
        Ok(output)
    }

    /// Insert, get and scan throughput together on a log y axis
    pub fn render_operations_combined(
        &self,
        table: &ResultTable<OperationsRow>,
    ) -> Result<PathBuf> {
        let layout = operations_combined_layout(table)?;
        let output = self.config.combined_output_path();
        self.render_to(&output, self.config.chart_size, |root| draw_chart(root, &layout))?;
        Ok(output)
    }

    fn render_to<F>(&self, output: &Path, size: (u32, u32), draw: F) -> Result<()>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
    {
        fonts::ensure_registered(&self.config.font_paths)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let started = Instant::now();
        let root = BitMapBackend::new(output, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        draw(&root)?;
        root.present().map_err(render_err)?;

        info!(
            output = %output.display(),
            elapsed = %humantime::format_duration(started.elapsed()),
            "chart written"
        );
        Ok(())
    }
}

fn render_err<E: Display>(err: E) -> KvPlotError {
    KvPlotError::RenderError(err.to_string())
}

/// Draw one chart into a drawing area
pub fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> Result<()> {
    debug!(title = %layout.title, ticks = ?layout.x_axis.ticks, "drawing chart");

    let mut chart = ChartBuilder::on(area)
        .caption(
            &layout.title,
            (style::FONT_FAMILY, style::TITLE_FONT_SIZE)
                .into_font()
                .style(FontStyle::Bold),
        )
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(80)
        .build_cartesian_2d(
            TickedAxis::from(&layout.x_axis),
            TickedAxis::from(&layout.y_axis),
        )
        .map_err(render_err)?;

    let x_format = layout.x_axis.format;
    let y_format = layout.y_axis.format;
    chart
        .configure_mesh()
        .x_desc(layout.x_desc.as_str())
        .y_desc(layout.y_desc.as_str())
        .x_label_formatter(&|v: &f64| x_format.label(*v))
        .y_label_formatter(&|v: &f64| y_format.label(*v))
        .axis_desc_style((style::FONT_FAMILY, style::AXIS_DESC_FONT_SIZE))
        .label_style((style::FONT_FAMILY, style::TICK_FONT_SIZE))
        .bold_line_style(BLACK.mix(0.12))
        .draw()
        .map_err(render_err)?;

    for series in &layout.series {
        let color = series.style.color;
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(style::LINE_WIDTH),
            ))
            .map_err(render_err)?
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + style::LEGEND_LINE_LENGTH, y)],
                    color.stroke_width(style::LINE_WIDTH),
                )
            });
        draw_markers(&mut chart, &series.points, &series.style)?;
    }

    chart
        .configure_series_labels()
        .position(layout.legend.into())
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font((style::FONT_FAMILY, style::LEGEND_FONT_SIZE))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<TickedAxis, TickedAxis>>,
    points: &[(f64, f64)],
    series_style: &SeriesStyle,
) -> Result<()> {
    let fill = series_style.color.filled();
    let size = series_style.marker_size;
    let drawn = match series_style.marker {
        Marker::Square => chart.draw_series(
            points
                .iter()
                .map(|p| EmptyElement::at(*p) + Rectangle::new([(-size, -size), (size, size)], fill)),
        ),
        Marker::Circle => chart.draw_series(points.iter().map(|p| Circle::new(*p, size, fill))),
        Marker::Triangle => {
            chart.draw_series(points.iter().map(|p| TriangleMarker::new(*p, size + 1, fill)))
        }
    };
    drawn.map_err(render_err)?;
    Ok(())
}
