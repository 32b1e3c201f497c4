use tracing::debug;

use crate::core::{
    MultiSeriesMode, Series, category_band_center, category_count, category_labels, category_x,
    multi_series_domain, project_grouped_bars, project_series_polylines,
};
use crate::error::WidgetResult;
use crate::render::{CanvasLayerKind, PathPrimitive, RenderFrame};

use super::ChartOptions;
use super::area_render_frame_builder::append_series_outline;
use super::axis_render_frame_builder::{append_category_labels, append_value_grid};
use super::layout_helpers::begin_chart_frame;
use super::legend_render_frame_builder::{LegendEntry, append_legend};

/// Builds a multi-series chart in line, bar or area mode.
///
/// Series `i` is drawn with palette color `i` (cycling), and every series
/// gets a legend swatch in the same color.
pub fn build_multi_series_frame(
    series: &[Series],
    mode: MultiSeriesMode,
    options: &ChartOptions,
) -> WidgetResult<RenderFrame> {
    let (mut frame, style, plot) = begin_chart_frame("multi_series", options)?;
    let domain = multi_series_domain(series, mode)?;

    let entries: Vec<LegendEntry> = series
        .iter()
        .enumerate()
        .map(|(index, s)| LegendEntry {
            label: s.label.clone(),
            color: style.palette.color_at(index),
        })
        .collect();

    let Some(domain) = domain else {
        debug!(series = series.len(), "multi-series chart has no samples");
        append_legend(&mut frame, &entries, plot, style.text, options);
        return Ok(frame);
    };
    append_value_grid(&mut frame, domain, plot, &style, options);

    let count = category_count(series);
    debug!(
        series = series.len(),
        categories = count,
        ?mode,
        "build multi-series frame"
    );

    match mode {
        MultiSeriesMode::Bar => {
            for bar in project_grouped_bars(series, plot, domain, options.bar_group_ratio)? {
                frame.push_fill(
                    CanvasLayerKind::Series,
                    PathPrimitive::rect(bar.x, bar.y, bar.width, bar.height),
                    style.palette.color_at(bar.series_index),
                );
            }
        }
        MultiSeriesMode::Line | MultiSeriesMode::Area => {
            let with_fill = mode == MultiSeriesMode::Area;
            for polyline in project_series_polylines(series, plot, domain, with_fill)? {
                let color = style.palette.color_at(polyline.series_index);
                if with_fill && !polyline.fill_polygon.is_empty() {
                    let polygon: Vec<(f64, f64)> =
                        polyline.fill_polygon.iter().map(|v| v.as_tuple()).collect();
                    frame.push_fill(
                        CanvasLayerKind::Series,
                        PathPrimitive::polygon(&polygon),
                        color.with_alpha(options.fill_alpha),
                    );
                }
                let line: Vec<(f64, f64)> =
                    polyline.line_points.iter().map(|v| v.as_tuple()).collect();
                append_series_outline(&mut frame, &line, color, options);
            }
        }
    }

    let labels = category_labels(series).into_iter().enumerate().map(|(index, label)| {
        let x = match mode {
            MultiSeriesMode::Bar => category_band_center(index, count, plot),
            MultiSeriesMode::Line | MultiSeriesMode::Area => category_x(index, count, plot),
        };
        (label, x)
    });
    append_category_labels(&mut frame, labels, plot, &style, options);
    append_legend(&mut frame, &entries, plot, style.text, options);

    Ok(frame)
}
