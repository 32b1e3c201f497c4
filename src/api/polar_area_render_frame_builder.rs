use tracing::debug;

use crate::core::{DataPoint, polar_ring_radii, project_polar_wedges};
use crate::error::WidgetResult;
use crate::render::{CanvasLayerKind, PathPrimitive, RenderFrame};

use super::ChartOptions;
use super::layout_helpers::begin_chart_frame;
use super::legend_render_frame_builder::{LegendEntry, append_legend};

const WEDGE_ALPHA: f64 = 0.7;
const RING_LINE_WIDTH_PX: f64 = 1.0;

/// Builds a polar-area chart: equal-angle wedges whose radius is the value
/// relative to the series maximum, over concentric reference rings.
pub fn build_polar_area_frame(
    data: &[DataPoint],
    options: &ChartOptions,
) -> WidgetResult<RenderFrame> {
    let (mut frame, style, plot) = begin_chart_frame("polar_area", options)?;
    let max_radius = plot.width.min(plot.height) / 2.0;
    let (cx, cy) = plot.center();
    let wedges = project_polar_wedges(data, (cx, cy), max_radius)?;
    debug!(wedges = wedges.len(), "build polar area frame");

    if options.show_grid {
        for radius in polar_ring_radii(max_radius, options.tick_count) {
            frame.push_stroke(
                CanvasLayerKind::Grid,
                PathPrimitive::circle(cx, cy, radius),
                style.grid,
                RING_LINE_WIDTH_PX,
            );
        }
    }

    for wedge in wedges.iter().filter(|wedge| wedge.radius > 0.0) {
        let color = style.palette.color_at(wedge.index);
        let path = wedge.to_path();
        frame.push_fill(
            CanvasLayerKind::Series,
            path.clone(),
            color.with_alpha(WEDGE_ALPHA),
        );
        frame.push_stroke(CanvasLayerKind::Series, path, color, RING_LINE_WIDTH_PX);
    }

    let entries: Vec<LegendEntry> = data
        .iter()
        .enumerate()
        .map(|(index, point)| LegendEntry {
            label: point.label.clone(),
            color: style.palette.color_at(index),
        })
        .collect();
    append_legend(&mut frame, &entries, plot, style.text, options);

    Ok(frame)
}
