use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::core::pie::PIE_START_ANGLE;
use crate::core::types::ensure_non_negative_values;
use crate::error::{WidgetError, WidgetResult};
use crate::render::PathPrimitive;

/// Deterministic geometry of one polar-area wedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarWedge {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl PolarWedge {
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    #[must_use]
    pub fn to_path(&self) -> PathPrimitive {
        PathPrimitive::new()
            .move_to(self.center_x, self.center_y)
            .arc(
                self.center_x,
                self.center_y,
                self.radius,
                self.start_angle,
                self.end_angle,
                false,
            )
            .close()
    }
}

/// Projects categories into equal-angle wedges whose radius encodes the value.
///
/// Every wedge spans `2π / n`. Radius is `value / max * max_radius`; an
/// all-zero series collapses every radius to zero.
pub fn project_polar_wedges(
    points: &[DataPoint],
    center: (f64, f64),
    max_radius: f64,
) -> WidgetResult<Vec<PolarWedge>> {
    if !max_radius.is_finite() || max_radius <= 0.0 {
        return Err(WidgetError::InvalidData(
            "polar max radius must be finite and > 0".to_owned(),
        ));
    }
    ensure_non_negative_values(points)?;
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let max_value = points.iter().map(|point| point.value).fold(0.0, f64::max);
    let sweep = TAU / points.len() as f64;

    Ok(points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let start_angle = PIE_START_ANGLE + index as f64 * sweep;
            let radius = if max_value > 0.0 {
                point.value / max_value * max_radius
            } else {
                0.0
            };
            PolarWedge {
                index,
                label: point.label.clone(),
                value: point.value,
                start_angle,
                end_angle: start_angle + sweep,
                center_x: center.0,
                center_y: center.1,
                radius,
            }
        })
        .collect())
}

/// Radii of concentric reference rings, innermost first.
#[must_use]
pub fn polar_ring_radii(max_radius: f64, rings: usize) -> Vec<f64> {
    (1..=rings)
        .map(|ring| max_radius * ring as f64 / rings as f64)
        .collect()
}
