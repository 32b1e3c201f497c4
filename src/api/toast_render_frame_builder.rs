use tracing::trace;

use crate::core::Viewport;
use crate::error::WidgetResult;
use crate::render::{
    CanvasLayerKind, Color, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::toast::{Clock, ToastManager, ToastMetrics, ToastPosition, layout_stack};

/// Appearance of toast cards in an overlay frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub metrics: ToastMetrics,
    pub card: Color,
    pub text: Color,
    pub font_size_px: f64,
    pub accent_width_px: f64,
    pub padding_px: f64,
    /// Opacity multiplier for cards running their exit transition.
    pub dismissing_alpha: f64,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            metrics: ToastMetrics::default(),
            card: Color::rgb(1.0, 1.0, 1.0),
            text: Color::from_rgb8(0x1F, 0x29, 0x37),
            font_size_px: 13.0,
            accent_width_px: 4.0,
            padding_px: 12.0,
            dismissing_alpha: 0.5,
        }
    }
}

/// Overlay frame with every on-screen toast drawn as a card.
///
/// The background is transparent so hosts can composite it over page
/// content. Each card carries an accent bar in its kind color, the kind
/// icon, an optional title line, the message and a close glyph for closable
/// toasts.
pub fn build_toast_overlay_frame<C: Clock>(
    manager: &ToastManager<C>,
    viewport: Viewport,
    style: &ToastStyle,
) -> WidgetResult<RenderFrame> {
    let viewport = viewport.ensure_valid()?;
    let mut frame = RenderFrame::new(viewport, Color::TRANSPARENT);
    let font = style.font_size_px;

    for position in ToastPosition::ALL {
        for rect in layout_stack(manager.stack(position), position, viewport, style.metrics) {
            let Some(toast) = manager.get(rect.id) else {
                continue;
            };
            let fade = if toast.visible() {
                1.0
            } else {
                style.dismissing_alpha
            };
            let card = style.card.with_alpha(style.card.alpha * fade);
            let text = style.text.with_alpha(style.text.alpha * fade);
            let accent = toast.kind().accent_color().with_alpha(fade);

            frame.push_fill(
                CanvasLayerKind::Overlay,
                PathPrimitive::rect(rect.x, rect.y, rect.width, rect.height),
                card,
            );
            frame.push_fill(
                CanvasLayerKind::Overlay,
                PathPrimitive::rect(rect.x, rect.y, style.accent_width_px, rect.height),
                accent,
            );

            let content_x = rect.x + style.accent_width_px + style.padding_px;
            frame.push_text(
                CanvasLayerKind::Overlay,
                TextPrimitive::new(
                    toast.kind().icon(),
                    content_x,
                    rect.y + style.padding_px,
                    font,
                    accent,
                    TextHAlign::Left,
                ),
            );

            let text_x = content_x + font * 1.5;
            let mut line_y = rect.y + style.padding_px;
            if let Some(title) = toast.title().filter(|title| !title.is_empty()) {
                frame.push_text(
                    CanvasLayerKind::Overlay,
                    TextPrimitive::new(title, text_x, line_y, font, text, TextHAlign::Left),
                );
                line_y += font * 1.4;
            }
            frame.push_text(
                CanvasLayerKind::Overlay,
                TextPrimitive::new(
                    toast.message(),
                    text_x,
                    line_y,
                    font,
                    text,
                    TextHAlign::Left,
                ),
            );

            if toast.closable() {
                frame.push_text(
                    CanvasLayerKind::Overlay,
                    TextPrimitive::new(
                        "×",
                        rect.x + rect.width - style.padding_px,
                        rect.y + style.padding_px,
                        font,
                        text,
                        TextHAlign::Right,
                    ),
                );
            }
        }
    }

    trace!(
        toasts = manager.active_count(),
        commands = frame.commands.len(),
        "build toast overlay frame"
    );
    Ok(frame)
}
