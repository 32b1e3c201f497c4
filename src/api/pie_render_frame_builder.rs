use tracing::debug;

use crate::core::{DataPoint, format_tick_value, project_pie_slices};
use crate::error::WidgetResult;
use crate::render::{CanvasLayerKind, Color, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartOptions;
use super::layout_helpers::begin_chart_frame;
use super::legend_render_frame_builder::{LegendEntry, append_legend};

const SLICE_SEPARATOR_WIDTH_PX: f64 = 2.0;
/// Slices below this share of the total get no percentage label.
const MIN_LABELED_FRACTION: f64 = 0.04;

/// Builds a pie chart: one filled slice per positive value, sweeping
/// clockwise from twelve o'clock.
pub fn build_pie_frame(data: &[DataPoint], options: &ChartOptions) -> WidgetResult<RenderFrame> {
    build_slices_frame("pie", data, options, 0.0)
}

/// Builds a donut chart: a pie with a hole of `options.inner_radius_ratio`
/// and the total printed in the center.
pub fn build_donut_frame(data: &[DataPoint], options: &ChartOptions) -> WidgetResult<RenderFrame> {
    build_slices_frame("donut", data, options, options.inner_radius_ratio)
}

fn build_slices_frame(
    kind: &'static str,
    data: &[DataPoint],
    options: &ChartOptions,
    inner_ratio: f64,
) -> WidgetResult<RenderFrame> {
    let (mut frame, style, plot) = begin_chart_frame(kind, options)?;
    let outer_radius = plot.width.min(plot.height) / 2.0;
    let inner_radius = outer_radius * inner_ratio;
    let slices = project_pie_slices(data, plot.center(), outer_radius, inner_radius)?;
    debug!(kind, points = data.len(), slices = slices.len(), "build slice frame");

    for slice in &slices {
        if slice.sweep() <= 0.0 {
            continue;
        }
        let path = slice.to_path();
        frame.push_fill(
            CanvasLayerKind::Series,
            path.clone(),
            style.palette.color_at(slice.index),
        );
        if slices.len() > 1 {
            frame.push_stroke(
                CanvasLayerKind::Series,
                path,
                style.background,
                SLICE_SEPARATOR_WIDTH_PX,
            );
        }
    }

    if options.show_labels {
        let label_radius = if inner_radius > 0.0 {
            (outer_radius + inner_radius) / 2.0
        } else {
            outer_radius * 0.65
        };
        for slice in slices
            .iter()
            .filter(|slice| slice.fraction >= MIN_LABELED_FRACTION)
        {
            let (x, y) = slice.anchor_at(label_radius);
            frame.push_text(
                CanvasLayerKind::Label,
                TextPrimitive::new(
                    format!("{}%", format_tick_value(slice.fraction * 100.0)),
                    x,
                    y - options.font_size_px / 2.0,
                    options.font_size_px,
                    Color::WHITE,
                    TextHAlign::Center,
                ),
            );
        }

        let total: f64 = slices.iter().map(|slice| slice.value).sum();
        if inner_radius > 0.0 && !slices.is_empty() && total.is_finite() {
            let (cx, cy) = plot.center();
            let font = options.font_size_px * 1.5;
            frame.push_text(
                CanvasLayerKind::Label,
                TextPrimitive::new(
                    format_tick_value(total),
                    cx,
                    cy - font / 2.0,
                    font,
                    style.text,
                    TextHAlign::Center,
                ),
            );
        }
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
