use crate::core::{PlotArea, ValueDomain, format_tick_value, value_ticks};
use crate::render::{CanvasLayerKind, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartOptions, ChartStyle};

const TICK_LABEL_GAP_PX: f64 = 6.0;
const GRID_LINE_WIDTH_PX: f64 = 1.0;

/// Horizontal gridlines plus value labels left of the plot.
pub(super) fn append_value_grid(
    frame: &mut RenderFrame,
    domain: ValueDomain,
    plot: PlotArea,
    style: &ChartStyle,
    options: &ChartOptions,
) {
    for tick in value_ticks(domain, plot, options.tick_count) {
        if options.show_grid {
            frame.push_stroke(
                CanvasLayerKind::Grid,
                PathPrimitive::polyline(&[(plot.left, tick.y), (plot.right(), tick.y)]),
                style.grid,
                GRID_LINE_WIDTH_PX,
            );
        }
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_tick_value(tick.value),
                plot.left - TICK_LABEL_GAP_PX,
                tick.y - options.font_size_px / 2.0,
                options.font_size_px,
                style.text,
                TextHAlign::Right,
            ),
        );
    }

    frame.push_stroke(
        CanvasLayerKind::Axis,
        PathPrimitive::polyline(&[
            (plot.left, plot.top),
            (plot.left, plot.bottom()),
            (plot.right(), plot.bottom()),
        ]),
        style.text,
        GRID_LINE_WIDTH_PX,
    );
}

/// Category labels centered under their x positions.
pub(super) fn append_category_labels(
    frame: &mut RenderFrame,
    labels: impl IntoIterator<Item = (String, f64)>,
    plot: PlotArea,
    style: &ChartStyle,
    options: &ChartOptions,
) {
    if !options.show_labels {
        return;
    }
    for (label, x) in labels {
        if label.is_empty() {
            continue;
        }
        frame.push_text(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                label,
                x,
                plot.bottom() + TICK_LABEL_GAP_PX,
                options.font_size_px,
                style.text,
                TextHAlign::Center,
            ),
        );
    }
}
