//! Axis resolution: scales, padded ranges, tick sets and tick labels.

use crate::util::units;

/// Fraction of the data span added on each side of an axis
pub const RANGE_MARGIN: f64 = 0.05;

/// Approximate number of ticks wanted on an auto-ticked linear axis
pub const LINEAR_TICK_TARGET: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Whether a value can be placed on this scale
    pub fn accepts(&self, value: f64) -> bool {
        match self {
            Scale::Linear => value.is_finite(),
            Scale::Log => value.is_finite() && value > 0.0,
        }
    }

    /// Map a value into the space where the axis is linear
    pub fn project(&self, value: f64) -> f64 {
        match self {
            Scale::Linear => value,
            Scale::Log => value.log10(),
        }
    }

    fn unproject(&self, value: f64) -> f64 {
        match self {
            Scale::Linear => value,
            Scale::Log => 10f64.powf(value),
        }
    }
}

/// How tick values are turned into labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// Whole number, for data sizes
    DataSize,
    /// `K`/`M` suffix without decimals
    Magnitude,
    /// `{:.2}M` from one million, `{:.0}K` below
    MillionsOrThousands,
    /// Always `{:.0}K`
    Thousands,
    /// `{:.2}M`, `{:.0}K`, or the plain value
    Compact,
}

impl TickFormat {
    pub fn label(&self, value: f64) -> String {
        match self {
            TickFormat::DataSize => units::format_data_size(value),
            TickFormat::Magnitude => units::format_magnitude(value),
            TickFormat::MillionsOrThousands => units::format_millions_or_thousands(value),
            TickFormat::Thousands => units::format_thousands(value),
            TickFormat::Compact => units::format_compact(value),
        }
    }
}

/// A fully resolved axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub scale: Scale,
    pub min: f64,
    pub max: f64,
    /// Major tick positions, ascending, all inside `min..=max`
    pub ticks: Vec<f64>,
    pub format: TickFormat,
}

impl AxisLayout {
    /// Axis whose ticks are exactly the given data values
    pub fn fixed(scale: Scale, values: &[f64], format: TickFormat) -> Option<Self> {
        let ticks = distinct_ascending(values.iter().copied().filter(|v| scale.accepts(*v)));
        let (min, max) = padded_range(scale, &ticks)?;
        Some(Self {
            scale,
            min,
            max,
            ticks,
            format,
        })
    }

    /// Axis with generated ticks covering the given data values
    pub fn auto(scale: Scale, values: &[f64], format: TickFormat) -> Option<Self> {
        let accepted: Vec<f64> = values.iter().copied().filter(|v| scale.accepts(*v)).collect();
        let (min, max) = padded_range(scale, &accepted)?;
        let ticks = match scale {
            Scale::Linear => linear_ticks(min, max, LINEAR_TICK_TARGET),
            Scale::Log => log_ticks(min, max),
        };
        Some(Self {
            scale,
            min,
            max,
            ticks,
            format,
        })
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|t| self.format.label(*t)).collect()
    }

    /// Position of a value along the axis, 0.0 at `min` and 1.0 at `max`
    pub fn normalize(&self, value: f64) -> f64 {
        let lo = self.scale.project(self.min);
        let hi = self.scale.project(self.max);
        (self.scale.project(value) - lo) / (hi - lo)
    }
}

/// Sorted values without repeats
pub fn distinct_ascending<I: IntoIterator<Item = f64>>(values: I) -> Vec<f64> {
    let mut out: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    out.sort_by(f64::total_cmp);
    out.dedup();
    out
}

/// Data extent widened by `RANGE_MARGIN` of its span on both sides
///
/// Works in log10 space for log axes. A zero span is widened so the
/// range never collapses. Returns `None` when no value fits the scale.
pub fn padded_range(scale: Scale, values: &[f64]) -> Option<(f64, f64)> {
    let projected: Vec<f64> = values
        .iter()
        .filter(|v| scale.accepts(**v))
        .map(|v| scale.project(*v))
        .collect();
    let lo = projected.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = projected.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * RANGE_MARGIN
    } else {
        match scale {
            // one tenth of a decade
            Scale::Log => 0.1,
            Scale::Linear if lo != 0.0 => lo.abs() * RANGE_MARGIN,
            Scale::Linear => 1.0,
        }
    };

    Some((scale.unproject(lo - pad), scale.unproject(hi + pad)))
}

/// Major ticks for a log axis
///
/// Powers of ten inside the range. When fewer than two fit, the 1-2-5
/// multiples of each decade, then every integer multiple, and finally
/// evenly spaced linear ticks, so a positive range always gets at least
/// two ticks.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0 && max > min) {
        return Vec::new();
    }
    let first = min.log10().floor() as i32;
    let last = max.log10().ceil() as i32;

    let decades = decade_multiples(first, last, &[1.0], min, max);
    if decades.len() >= 2 {
        return decades;
    }
    let one_two_five = decade_multiples(first, last, &[1.0, 2.0, 5.0], min, max);
    if one_two_five.len() >= 2 {
        return one_two_five;
    }
    let integers = decade_multiples(
        first,
        last,
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        min,
        max,
    );
    if integers.len() >= 2 {
        return integers;
    }
    linear_ticks(min, max, LINEAR_TICK_TARGET)
}

fn decade_multiples(first: i32, last: i32, multiples: &[f64], min: f64, max: f64) -> Vec<f64> {
    (first..=last)
        .flat_map(|e| multiples.iter().map(move |m| m * 10f64.powi(e)))
        .filter(|t| *t >= min && *t <= max)
        .collect()
}

/// Evenly spaced ticks on a "nice" step (1, 2, 2.5 or 5 times a power of ten)
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end)
        .map(|i| i as f64 * step)
        // avoid "-0" labels
        .map(|t| if t == 0.0 { 0.0 } else { t })
        .collect()
}

fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let fraction = raw / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_fixed_ticks_are_the_data() {
        let axis = AxisLayout::fixed(Scale::Log, &[400.0, 100.0, 200.0, 100.0], TickFormat::DataSize)
            .unwrap();
        assert_eq!(axis.ticks, vec![100.0, 200.0, 400.0]);
        assert_eq!(axis.labels(), vec!["100", "200", "400"]);
        assert!(axis.min < 100.0 && axis.max > 400.0);
    }

    #[test]
    fn test_fixed_log_axis_drops_non_positive() {
        let axis = AxisLayout::fixed(Scale::Log, &[0.0, -5.0, 10.0], TickFormat::DataSize).unwrap();
        assert_eq!(axis.ticks, vec![10.0]);
        assert!(AxisLayout::fixed(Scale::Log, &[0.0], TickFormat::DataSize).is_none());
    }

    #[test]
    fn test_padded_range_linear() {
        let (lo, hi) = padded_range(Scale::Linear, &[100.0, 300.0]).unwrap();
        assert!(approx(lo, 90.0));
        assert!(approx(hi, 310.0));

        let (lo, hi) = padded_range(Scale::Linear, &[200.0]).unwrap();
        assert!(approx(lo, 190.0) && approx(hi, 210.0));

        let (lo, hi) = padded_range(Scale::Linear, &[0.0]).unwrap();
        assert!(approx(lo, -1.0) && approx(hi, 1.0));

        assert!(padded_range(Scale::Linear, &[]).is_none());
    }

    #[test]
    fn test_padded_range_log() {
        let (lo, hi) = padded_range(Scale::Log, &[10.0, 1000.0]).unwrap();
        assert!(approx(lo, 10f64.powf(0.9)));
        assert!(approx(hi, 10f64.powf(3.1)));

        let (lo, hi) = padded_range(Scale::Log, &[100.0]).unwrap();
        assert!(lo < 100.0 && hi > 100.0);
    }

    #[test]
    fn test_log_ticks_decades() {
        assert_eq!(log_ticks(50.0, 200_000.0), vec![100.0, 1_000.0, 10_000.0, 100_000.0]);
    }

    #[test]
    fn test_log_ticks_fall_back_to_1_2_5() {
        let ticks = log_ticks(4_400.0, 21_500.0);
        assert_eq!(ticks, vec![5_000.0, 10_000.0, 20_000.0]);
        let labels: Vec<String> = ticks.iter().map(|t| TickFormat::Magnitude.label(*t)).collect();
        assert_eq!(labels, vec!["5K", "10K", "20K"]);
    }

    #[test]
    fn test_log_ticks_fall_back_to_integer_multiples() {
        // no 1, 2 or 5 multiple between 2.9K and 4.6K
        assert_eq!(log_ticks(2_939.79, 4_592.16), vec![3_000.0, 4_000.0]);
    }

    #[test]
    fn test_log_ticks_fall_back_to_linear() {
        let ticks = log_ticks(285_000.0, 345_000.0);
        assert!(ticks.len() >= 2);
        assert!(ticks.iter().all(|t| (285_000.0..=345_000.0).contains(t)));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_log_ticks_invalid_range() {
        assert!(log_ticks(0.0, 10.0).is_empty());
        assert!(log_ticks(10.0, 10.0).is_empty());
    }

    #[test]
    fn test_linear_ticks() {
        assert_eq!(linear_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(
            linear_ticks(93_000.0, 307_000.0, 6),
            vec![100_000.0, 150_000.0, 200_000.0, 250_000.0, 300_000.0]
        );
        assert!(linear_ticks(5.0, 5.0, 6).is_empty());
    }

    #[test]
    fn test_linear_ticks_never_negative_zero() {
        let ticks = linear_ticks(-1.0, 1.0, 4);
        assert!(ticks.iter().all(|t| !(t.is_sign_negative() && *t == 0.0)));
        assert!(ticks.contains(&0.0));
    }

    #[test]
    fn test_normalize() {
        let axis = AxisLayout {
            scale: Scale::Log,
            min: 10.0,
            max: 1000.0,
            ticks: vec![100.0],
            format: TickFormat::Magnitude,
        };
        assert!(approx(axis.normalize(100.0), 0.5));

        let axis = AxisLayout {
            scale: Scale::Linear,
            min: 0.0,
            max: 200.0,
            ticks: vec![],
            format: TickFormat::DataSize,
        };
        assert!(approx(axis.normalize(50.0), 0.25));
    }
}
