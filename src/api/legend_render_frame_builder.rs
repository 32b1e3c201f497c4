use crate::core::PlotArea;
use crate::render::{
    CanvasLayerKind, Color, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartOptions;
use super::layout_helpers::estimate_label_text_width_px;

const SWATCH_TEXT_GAP_PX: f64 = 4.0;
const ITEM_GAP_PX: f64 = 12.0;

/// One legend row item: swatch color plus label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Lays entries left to right in the band above the plot, wrapping to a
/// new row when the next item would pass the plot's right edge.
pub(super) fn append_legend(
    frame: &mut RenderFrame,
    entries: &[LegendEntry],
    plot: PlotArea,
    text_color: Color,
    options: &ChartOptions,
) {
    if !options.show_legend || entries.is_empty() {
        return;
    }

    let font = options.font_size_px;
    let swatch = font * 0.8;
    let row_height = font * 1.4;
    let mut x = plot.left;
    let mut row_top = (plot.top - row_height).max(0.0) / 2.0;

    for entry in entries {
        let text_width = estimate_label_text_width_px(&entry.label, font);
        let item_width = swatch + SWATCH_TEXT_GAP_PX + text_width;
        if x > plot.left && x + item_width > plot.right() {
            x = plot.left;
            row_top += row_height;
        }

        frame.push_fill(
            CanvasLayerKind::Legend,
            PathPrimitive::rect(x, row_top + (font - swatch) / 2.0, swatch, swatch),
            entry.color,
        );
        if !entry.label.is_empty() {
            frame.push_text(
                CanvasLayerKind::Legend,
                TextPrimitive::new(
                    entry.label.clone(),
                    x + swatch + SWATCH_TEXT_GAP_PX,
                    row_top,
                    font,
                    text_color,
                    TextHAlign::Left,
                ),
            );
        }
        x += item_width + ITEM_GAP_PX;
    }
}
