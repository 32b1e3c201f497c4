use tracing::debug;

use crate::core::{DataPoint, ValueDomain, category_x, project_area_geometry};
use crate::core::types::ensure_finite_values;
use crate::error::WidgetResult;
use crate::render::{CanvasLayerKind, Color, PathPrimitive, RenderFrame};

use super::ChartOptions;
use super::axis_render_frame_builder::{append_category_labels, append_value_grid};
use super::layout_helpers::begin_chart_frame;

pub(super) const POINT_RADIUS_PX: f64 = 3.0;

/// Builds a single-series area chart: a polyline through the scaled samples,
/// closed to the plot bottom and filled with a translucent copy of the
/// stroke color.
pub fn build_area_frame(data: &[DataPoint], options: &ChartOptions) -> WidgetResult<RenderFrame> {
    let (mut frame, style, plot) = begin_chart_frame("area", options)?;
    ensure_finite_values(data)?;

    let Some(domain) = ValueDomain::from_values(data.iter().map(|point| point.value)) else {
        debug!("area chart has no samples");
        return Ok(frame);
    };
    append_value_grid(&mut frame, domain, plot, &style, options);

    let geometry = project_area_geometry(data, plot, domain)?;
    debug!(
        points = geometry.line_points.len(),
        degenerate = domain.is_degenerate(),
        "build area frame"
    );

    let stroke = style.palette.color_at(0);
    let polygon: Vec<(f64, f64)> = geometry.fill_polygon.iter().map(|v| v.as_tuple()).collect();
    frame.push_fill(
        CanvasLayerKind::Series,
        PathPrimitive::polygon(&polygon),
        stroke.with_alpha(options.fill_alpha),
    );
    let line: Vec<(f64, f64)> = geometry.line_points.iter().map(|v| v.as_tuple()).collect();
    append_series_outline(&mut frame, &line, stroke, options);

    append_category_labels(
        &mut frame,
        data.iter()
            .enumerate()
            .map(|(index, point)| (point.label.clone(), category_x(index, data.len(), plot))),
        plot,
        &style,
        options,
    );

    Ok(frame)
}

/// Strokes `line` and, when enabled, marks each vertex with a dot.
pub(super) fn append_series_outline(
    frame: &mut RenderFrame,
    line: &[(f64, f64)],
    color: Color,
    options: &ChartOptions,
) {
    if line.len() > 1 {
        frame.push_stroke(
            CanvasLayerKind::Series,
            PathPrimitive::polyline(line),
            color,
            options.line_width,
        );
    }
    if options.show_points || line.len() == 1 {
        for &(x, y) in line {
            frame.push_fill(
                CanvasLayerKind::Series,
                PathPrimitive::circle(x, y, POINT_RADIUS_PX),
                color,
            );
        }
    }
}
