use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::PlotArea;
use crate::error::{WidgetError, WidgetResult};

/// Closed numeric range used to scale values into plot space.
///
/// A degenerate domain (`min == max`) is valid: every value maps to the
/// middle of the plot height instead of dividing by a zero span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    min: f64,
    max: f64,
}

impl ValueDomain {
    pub fn new(min: f64, max: f64) -> WidgetResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(WidgetError::InvalidData(
                "value domain must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Smallest domain covering every value, or `None` for an empty input.
    ///
    /// Non-finite values are ignored.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            let value = OrderedFloat(value);
            bounds = Some(match bounds {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }
        bounds.map(|(min, max)| Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    /// Extends the domain so it contains zero.
    #[must_use]
    pub fn with_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
        }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// `max - min`; infinite when the extremes are finite but far apart.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Position of `value` within the domain as a 0..=1 fraction.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        // Halved operands keep the difference finite for any finite bounds.
        (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
    }

    /// Value at `fraction` of the way from `min` to `max`.
    #[must_use]
    pub fn value_at(self, fraction: f64) -> f64 {
        self.min * (1.0 - fraction) + self.max * fraction
    }

    /// Maps `value` to a y pixel inside `plot`, with `max` at the top edge.
    #[must_use]
    pub fn value_to_y(self, value: f64, plot: PlotArea) -> f64 {
        plot.bottom() - self.normalize(value) * plot.height
    }

    /// Inverse of `value_to_y`. Degenerate domains always yield `min`.
    #[must_use]
    pub fn y_to_value(self, y: f64, plot: PlotArea) -> f64 {
        if self.is_degenerate() || plot.height <= 0.0 {
            return self.min;
        }
        self.value_at((plot.bottom() - y) / plot.height)
    }
}
