use tracing::trace;

use crate::core::PlotArea;
use crate::error::WidgetResult;
use crate::render::RenderFrame;

use super::{ChartOptions, ChartStyle};

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Validates options and returns an empty frame, its style and the plot area.
pub(super) fn begin_chart_frame(
    kind: &'static str,
    options: &ChartOptions,
) -> WidgetResult<(RenderFrame, ChartStyle, PlotArea)> {
    let style = options.resolve()?;
    let viewport = options.viewport();
    trace!(
        kind,
        width = viewport.width,
        height = viewport.height,
        "begin chart frame"
    );
    let frame = RenderFrame::new(viewport, style.background);
    let plot = PlotArea::inset(viewport, options.padding);
    Ok((frame, style, plot))
}
