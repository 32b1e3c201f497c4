use serde::{Deserialize, Serialize};

use crate::core::types::ensure_finite_values;
use crate::core::{DataPoint, PlotArea, ValueDomain};
use crate::error::WidgetResult;

/// Vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

impl AreaVertex {
    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Deterministic geometry for an area series.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// X pixel of category `index` when `count` categories span the plot edge to edge.
///
/// A single category sits in the horizontal center.
#[must_use]
pub fn category_x(index: usize, count: usize, plot: PlotArea) -> f64 {
    if count <= 1 {
        return plot.left + plot.width / 2.0;
    }
    plot.left + index as f64 * plot.width / (count - 1) as f64
}

pub(crate) fn project_polyline(
    points: &[DataPoint],
    count: usize,
    plot: PlotArea,
    domain: ValueDomain,
) -> Vec<AreaVertex> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| AreaVertex {
            x: category_x(index, count, plot),
            y: domain.value_to_y(point.value, plot),
        })
        .collect()
}

pub(crate) fn close_to_baseline(line_points: &[AreaVertex], baseline_y: f64) -> Vec<AreaVertex> {
    let (Some(first), Some(last)) = (line_points.first(), line_points.last()) else {
        return Vec::new();
    };

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(AreaVertex {
        x: first.x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(AreaVertex {
        x: last.x,
        y: baseline_y,
    });
    // Repeat the first baseline vertex so consumers need no implicit closure.
    fill_polygon.push(AreaVertex {
        x: first.x,
        y: baseline_y,
    });
    fill_polygon
}

/// Projects `(index, value)` samples into area geometry closed to the plot bottom.
pub fn project_area_geometry(
    points: &[DataPoint],
    plot: PlotArea,
    domain: ValueDomain,
) -> WidgetResult<AreaGeometry> {
    ensure_finite_values(points)?;
    if points.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let line_points = project_polyline(points, points.len(), plot, domain);
    let fill_polygon = close_to_baseline(&line_points, plot.bottom());
    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
