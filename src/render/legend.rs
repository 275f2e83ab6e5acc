//! Legend placement.
//!
//! Picks the region of the plotting area the plotted lines cross least,
//! among the four corners, the four edge midpoints and the center.

use plotters::chart::SeriesLabelPosition;

/// Width of a legend region as a fraction of the plotting area
const REGION_WIDTH: f64 = 0.4;
/// Height of a legend region as a fraction of the plotting area
const REGION_HEIGHT: f64 = 0.3;
/// Samples taken along each line segment
const SEGMENT_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    MiddleRight,
    MiddleLeft,
    LowerMiddle,
    UpperMiddle,
    MiddleMiddle,
}

#[derive(Clone, Copy)]
enum Band {
    Low,
    Middle,
    High,
}

impl Band {
    fn contains(self, value: f64, extent: f64) -> bool {
        match self {
            Band::Low => value <= extent,
            Band::Middle => (value - 0.5).abs() <= extent / 2.0,
            Band::High => value >= 1.0 - extent,
        }
    }
}

impl LegendPosition {
    /// Preference order when positions tie
    pub const ALL: [LegendPosition; 9] = [
        LegendPosition::UpperRight,
        LegendPosition::UpperLeft,
        LegendPosition::LowerLeft,
        LegendPosition::LowerRight,
        LegendPosition::MiddleRight,
        LegendPosition::MiddleLeft,
        LegendPosition::LowerMiddle,
        LegendPosition::UpperMiddle,
        LegendPosition::MiddleMiddle,
    ];

    /// Horizontal then vertical band of this position
    fn bands(&self) -> (Band, Band) {
        match self {
            LegendPosition::UpperRight => (Band::High, Band::High),
            LegendPosition::UpperLeft => (Band::Low, Band::High),
            LegendPosition::LowerLeft => (Band::Low, Band::Low),
            LegendPosition::LowerRight => (Band::High, Band::Low),
            LegendPosition::MiddleRight => (Band::High, Band::Middle),
            LegendPosition::MiddleLeft => (Band::Low, Band::Middle),
            LegendPosition::LowerMiddle => (Band::Middle, Band::Low),
            LegendPosition::UpperMiddle => (Band::Middle, Band::High),
            LegendPosition::MiddleMiddle => (Band::Middle, Band::Middle),
        }
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        let (horizontal, vertical) = self.bands();
        horizontal.contains(x, REGION_WIDTH) && vertical.contains(y, REGION_HEIGHT)
    }
}

impl From<LegendPosition> for SeriesLabelPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
            LegendPosition::MiddleRight => SeriesLabelPosition::MiddleRight,
            LegendPosition::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            LegendPosition::LowerMiddle => SeriesLabelPosition::LowerMiddle,
            LegendPosition::UpperMiddle => SeriesLabelPosition::UpperMiddle,
            LegendPosition::MiddleMiddle => SeriesLabelPosition::MiddleMiddle,
        }
    }
}

/// Position with the fewest line samples in it
///
/// Each inner slice is one polyline in normalized coordinates, where
/// `(0, 0)` is the lower-left and `(1, 1)` the upper-right of the plot.
pub fn best_position(lines: &[Vec<(f64, f64)>]) -> LegendPosition {
    let samples: Vec<(f64, f64)> = lines.iter().flat_map(|line| sample_line(line)).collect();

    let mut best = LegendPosition::UpperRight;
    let mut best_count = usize::MAX;
    for position in LegendPosition::ALL {
        let count = samples.iter().filter(|p| position.contains(**p)).count();
        if count < best_count {
            best = position;
            best_count = count;
        }
    }
    best
}

fn sample_line(line: &[(f64, f64)]) -> Vec<(f64, f64)> {
    match line {
        [] => Vec::new(),
        [only] => vec![*only],
        _ => {
            let mut out: Vec<(f64, f64)> = line
                .windows(2)
                .flat_map(|w| {
                    let ((x0, y0), (x1, y1)) = (w[0], w[1]);
                    (0..SEGMENT_SAMPLES).map(move |i| {
                        let t = i as f64 / SEGMENT_SAMPLES as f64;
                        (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
                    })
                })
                .collect();
            out.extend(line.last().copied());
            out
        }
    }
}
