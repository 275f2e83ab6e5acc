//! Drawing-free chart descriptions.
//!
//! A [`ChartLayout`] carries everything needed to draw one chart: resolved
//! axes with their ticks, the points of each series, and the legend position.

use std::path::Path;

use tracing::warn;

use super::axis::{AxisLayout, Scale, TickFormat};
use super::legend::{best_position, LegendPosition};
use super::style::{SeriesStyle, X_DESC, Y_DESC};
use crate::{KvPlotError, Result};

#[derive(Debug, Clone)]
pub struct SeriesLayout {
    pub label: String,
    pub style: SeriesStyle,
    /// Points in file order
    pub points: Vec<(f64, f64)>,
}

impl SeriesLayout {
    pub fn new(label: impl Into<String>, style: SeriesStyle, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            style,
            points,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub series: Vec<SeriesLayout>,
    pub legend: LegendPosition,
}

/// Scale and label format of one axis
#[derive(Debug, Clone, Copy)]
pub struct AxisSpec {
    pub scale: Scale,
    pub format: TickFormat,
}

impl AxisSpec {
    pub const fn new(scale: Scale, format: TickFormat) -> Self {
        Self { scale, format }
    }
}

impl ChartLayout {
    /// Resolve axes and legend for a set of series
    ///
    /// The x axis is ticked at the distinct x values; the y axis gets
    /// generated ticks. Points that cannot sit on a log axis are dropped.
    pub fn resolve(
        title: &str,
        source: &Path,
        x: AxisSpec,
        y: AxisSpec,
        series: Vec<SeriesLayout>,
    ) -> Result<Self> {
        let series: Vec<SeriesLayout> = series
            .into_iter()
            .map(|mut s| {
                let before = s.points.len();
                s.points
                    .retain(|(px, py)| x.scale.accepts(*px) && y.scale.accepts(*py));
                if s.points.len() != before {
                    warn!(
                        series = %s.label,
                        dropped = before - s.points.len(),
                        "skipping points that cannot be placed on the axes"
                    );
                }
                s
            })
            .collect();

        let xs: Vec<f64> = series.iter().flat_map(|s| s.points.iter().map(|p| p.0)).collect();
        let ys: Vec<f64> = series.iter().flat_map(|s| s.points.iter().map(|p| p.1)).collect();

        let empty = || {
            KvPlotError::EmptyTable(format!(
                "no plottable rows for '{}' in {}",
                title,
                source.display()
            ))
        };
        let x_axis = AxisLayout::fixed(x.scale, &xs, x.format).ok_or_else(empty)?;
        let y_axis = AxisLayout::auto(y.scale, &ys, y.format).ok_or_else(empty)?;

        let normalized: Vec<Vec<(f64, f64)>> = series
            .iter()
            .map(|s| {
                s.points
                    .iter()
                    .map(|(px, py)| (x_axis.normalize(*px), y_axis.normalize(*py)))
                    .collect()
            })
            .collect();
        let legend = best_position(&normalized);

        Ok(Self {
            title: title.to_string(),
            x_desc: X_DESC.to_string(),
            y_desc: Y_DESC.to_string(),
            x_axis,
            y_axis,
            series,
            legend,
        })
    }

    pub fn series_named(&self, label: &str) -> Option<&SeriesLayout> {
        self.series.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::{BINARY_SEARCH, GET};

    const LOG_LOG: (AxisSpec, AxisSpec) = (
        AxisSpec::new(Scale::Log, TickFormat::DataSize),
        AxisSpec::new(Scale::Log, TickFormat::Magnitude),
    );

    #[test]
    fn test_resolve_drops_points_off_log_axis() {
        let series = vec![SeriesLayout::new(
            "s",
            BINARY_SEARCH,
            vec![(100.0, 0.0), (200.0, 5_000.0), (400.0, 2_000.0)],
        )];
        let layout =
            ChartLayout::resolve("t", Path::new("x.csv"), LOG_LOG.0, LOG_LOG.1, series).unwrap();
        assert_eq!(layout.series[0].points, vec![(200.0, 5_000.0), (400.0, 2_000.0)]);
        assert_eq!(layout.x_axis.ticks, vec![200.0, 400.0]);
        assert_eq!(layout.x_desc, X_DESC);
    }

    #[test]
    fn test_resolve_nothing_plottable() {
        let series = vec![SeriesLayout::new("s", GET, vec![(100.0, -1.0)])];
        let err = ChartLayout::resolve("t", Path::new("x.csv"), LOG_LOG.0, LOG_LOG.1, series)
            .unwrap_err();
        assert!(matches!(err, KvPlotError::EmptyTable(ref m) if m.contains("x.csv")));

        let err = ChartLayout::resolve("t", Path::new("x.csv"), LOG_LOG.0, LOG_LOG.1, vec![])
            .unwrap_err();
        assert!(matches!(err, KvPlotError::EmptyTable(_)));
    }

    #[test]
    fn test_series_named() {
        let series = vec![SeriesLayout::new("Get", GET, vec![(1.0, 1.0), (2.0, 2.0)])];
        let layout = ChartLayout::resolve(
            "t",
            Path::new("x.csv"),
            AxisSpec::new(Scale::Linear, TickFormat::DataSize),
            AxisSpec::new(Scale::Linear, TickFormat::Thousands),
            series,
        )
        .unwrap();
        assert!(layout.series_named("Get").is_some());
        assert!(layout.series_named("Scan").is_none());
    }
}
