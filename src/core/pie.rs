use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::core::types::ensure_non_negative_values;
use crate::error::{WidgetError, WidgetResult};
use crate::render::PathPrimitive;

/// Angle of the first slice edge: twelve o'clock.
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;

/// Deterministic geometry of one pie or donut slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Share of the total, in 0..=1.
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub outer_radius: f64,
    /// Zero for pie slices, > 0 for donut slices.
    pub inner_radius: f64,
}

impl PieSlice {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }

    /// Point on the slice bisector at `radius` from the center.
    #[must_use]
    pub fn anchor_at(&self, radius: f64) -> (f64, f64) {
        let angle = self.mid_angle();
        (
            self.center_x + radius * angle.cos(),
            self.center_y + radius * angle.sin(),
        )
    }

    /// Closed outline suitable for filling.
    #[must_use]
    pub fn to_path(&self) -> PathPrimitive {
        let (cx, cy) = (self.center_x, self.center_y);
        if self.inner_radius <= 0.0 {
            return PathPrimitive::new()
                .move_to(cx, cy)
                .arc(
                    cx,
                    cy,
                    self.outer_radius,
                    self.start_angle,
                    self.end_angle,
                    false,
                )
                .close();
        }

        PathPrimitive::new()
            .move_to(
                cx + self.outer_radius * self.start_angle.cos(),
                cy + self.outer_radius * self.start_angle.sin(),
            )
            .arc(
                cx,
                cy,
                self.outer_radius,
                self.start_angle,
                self.end_angle,
                false,
            )
            .line_to(
                cx + self.inner_radius * self.end_angle.cos(),
                cy + self.inner_radius * self.end_angle.sin(),
            )
            .arc(
                cx,
                cy,
                self.inner_radius,
                self.end_angle,
                self.start_angle,
                true,
            )
            .close()
    }
}

/// Projects values into a cumulative angular sweep starting at twelve o'clock.
///
/// Each slice spans `value / total * 2π`. A positive `inner_radius` carves a
/// donut hole. A zero total yields no slices.
pub fn project_pie_slices(
    points: &[DataPoint],
    center: (f64, f64),
    outer_radius: f64,
    inner_radius: f64,
) -> WidgetResult<Vec<PieSlice>> {
    if !outer_radius.is_finite() || outer_radius <= 0.0 {
        return Err(WidgetError::InvalidData(
            "pie outer radius must be finite and > 0".to_owned(),
        ));
    }
    if !inner_radius.is_finite() || inner_radius < 0.0 || inner_radius >= outer_radius {
        return Err(WidgetError::InvalidData(
            "pie inner radius must be finite and in [0, outer radius)".to_owned(),
        ));
    }
    ensure_non_negative_values(points)?;

    // Summing values relative to the largest one keeps the total finite.
    let largest = points.iter().map(|point| point.value).fold(0.0, f64::max);
    if largest <= 0.0 {
        return Ok(Vec::new());
    }
    let scaled_total: f64 = points.iter().map(|point| point.value / largest).sum();

    let mut slices = Vec::with_capacity(points.len());
    let mut cursor = PIE_START_ANGLE;
    for (index, point) in points.iter().enumerate() {
        let fraction = point.value / largest / scaled_total;
        let sweep = fraction * TAU;
        slices.push(PieSlice {
            index,
            label: point.label.clone(),
            value: point.value,
            fraction,
            start_angle: cursor,
            end_angle: cursor + sweep,
            center_x: center.0,
            center_y: center.1,
            outer_radius,
            inner_radius,
        });
        cursor += sweep;
    }

    Ok(slices)
}
