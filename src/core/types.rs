use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> WidgetResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WidgetError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One labeled sample of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Named dataset plotted by multi-series charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }
}

/// Rectangle in pixel space inside which series geometry is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Viewport minus a uniform `padding`, clamped to a non-negative size.
    #[must_use]
    pub fn inset(viewport: Viewport, padding: f64) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let padding = padding.max(0.0).min(width / 2.0).min(height / 2.0);
        Self {
            left: padding,
            top: padding,
            width: width - 2.0 * padding,
            height: height - 2.0 * padding,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

pub(crate) fn ensure_finite_values(points: &[DataPoint]) -> WidgetResult<()> {
    match points.iter().find(|point| !point.value.is_finite()) {
        Some(point) => Err(WidgetError::InvalidData(format!(
            "value for `{}` must be finite",
            point.label
        ))),
        None => Ok(()),
    }
}

pub(crate) fn ensure_non_negative_values(points: &[DataPoint]) -> WidgetResult<()> {
    ensure_finite_values(points)?;
    match points.iter().find(|point| point.value < 0.0) {
        Some(point) => Err(WidgetError::InvalidData(format!(
            "value for `{}` must be >= 0 in proportional charts",
            point.label
        ))),
        None => Ok(()),
    }
}
