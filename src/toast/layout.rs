use serde::{Deserialize, Serialize};

use crate::core::Viewport;

use super::{Toast, ToastId, ToastPosition};

/// Fixed card geometry used for stacking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToastMetrics {
    pub width: f64,
    pub height: f64,
    /// Vertical space between stacked cards.
    pub gap: f64,
    /// Distance from the viewport edges.
    pub margin: f64,
}

impl Default for ToastMetrics {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 64.0,
            gap: 8.0,
            margin: 16.0,
        }
    }
}

/// Pixel rectangle of one toast card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToastRect {
    pub id: ToastId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lays out one position container.
///
/// `toasts` are given in creation order and the result keeps that order.
/// Top anchors grow downward from the top edge; bottom anchors grow upward
/// with the newest card nearest the bottom edge. Cards wider than the
/// viewport are shrunk to fit inside the margins.
#[must_use]
pub fn layout_stack<'a>(
    toasts: impl IntoIterator<Item = &'a Toast>,
    position: ToastPosition,
    viewport: Viewport,
    metrics: ToastMetrics,
) -> Vec<ToastRect> {
    let ids: Vec<ToastId> = toasts.into_iter().map(Toast::id).collect();
    let viewport_width = f64::from(viewport.width);
    let viewport_height = f64::from(viewport.height);
    let width = metrics
        .width
        .min(viewport_width - 2.0 * metrics.margin)
        .max(0.0);
    let x = match position {
        ToastPosition::TopLeft | ToastPosition::BottomLeft => metrics.margin,
        ToastPosition::TopCenter | ToastPosition::BottomCenter => (viewport_width - width) / 2.0,
        ToastPosition::TopRight | ToastPosition::BottomRight => {
            viewport_width - metrics.margin - width
        }
    };
    let step = metrics.height + metrics.gap;
    let count = ids.len();

    ids.into_iter()
        .enumerate()
        .map(|(index, id)| {
            let y = if position.is_top() {
                metrics.margin + step * index as f64
            } else {
                let from_edge = (count - 1 - index) as f64;
                viewport_height - metrics.margin - metrics.height - step * from_edge
            };
            ToastRect {
                id,
                x,
                y,
                width,
                height: metrics.height,
            }
        })
        .collect()
}
