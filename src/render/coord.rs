//! A plotters coordinate whose key points are exactly a precomputed tick set.
//!
//! The stock linear and log coordinates pick their own key points; here the
//! bold points are the resolved ticks of an [`AxisLayout`] and there are no
//! light points, so neither minor ticks nor minor grid lines are drawn.

use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};

use super::axis::{AxisLayout, Scale};

#[derive(Debug, Clone)]
pub struct TickedAxis {
    scale: Scale,
    min: f64,
    max: f64,
    ticks: Vec<f64>,
}

impl From<&AxisLayout> for TickedAxis {
    fn from(axis: &AxisLayout) -> Self {
        Self {
            scale: axis.scale,
            min: axis.min,
            max: axis.max,
            ticks: axis.ticks.clone(),
        }
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let lo = self.scale.project(self.min);
        let hi = self.scale.project(self.max);
        let actual_length = limit.1 - limit.0;
        if actual_length == 0 || hi == lo {
            return limit.1;
        }

        let logic_length = (self.scale.project(*value) - lo) / (hi - lo);
        if !logic_length.is_finite() {
            return if logic_length.is_sign_negative() { limit.0 } else { limit.1 };
        }

        limit.0 + (actual_length as f64 * logic_length + 1e-3).floor() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.min..self.max
    }
}
