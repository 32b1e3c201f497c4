use crate::core::Viewport;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{CanvasLayerKind, Color, DrawingSurface, PathPrimitive, TextPrimitive};

/// One drawing operation in a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        layer: CanvasLayerKind,
        path: PathPrimitive,
        color: Color,
    },
    Stroke {
        layer: CanvasLayerKind,
        path: PathPrimitive,
        color: Color,
        width: f64,
    },
    Text {
        layer: CanvasLayerKind,
        text: TextPrimitive,
    },
}

impl DrawCommand {
    #[must_use]
    pub fn layer(&self) -> CanvasLayerKind {
        match self {
            Self::Fill { layer, .. } | Self::Stroke { layer, .. } | Self::Text { layer, .. } => {
                *layer
            }
        }
    }

    pub fn validate(&self) -> WidgetResult<()> {
        match self {
            Self::Fill { path, color, .. } => {
                path.validate()?;
                color.validate()
            }
            Self::Stroke {
                path, color, width, ..
            } => {
                path.validate()?;
                if !width.is_finite() || *width <= 0.0 {
                    return Err(WidgetError::InvalidData(
                        "stroke width must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()
            }
            Self::Text { text, .. } => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one full redraw of a surface.
///
/// Commands replay in insertion order after the surface is cleared with
/// `background`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push_fill(&mut self, layer: CanvasLayerKind, path: PathPrimitive, color: Color) {
        self.commands.push(DrawCommand::Fill { layer, path, color });
    }

    pub fn push_stroke(
        &mut self,
        layer: CanvasLayerKind,
        path: PathPrimitive,
        color: Color,
        width: f64,
    ) {
        self.commands.push(DrawCommand::Stroke {
            layer,
            path,
            color,
            width,
        });
    }

    pub fn push_text(&mut self, layer: CanvasLayerKind, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text { layer, text });
    }

    /// Commands on a single layer, in paint order.
    pub fn layer_commands(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |command| command.layer() == layer)
    }

    /// Filled paths on `layer` together with their colors.
    pub fn fills_on(
        &self,
        layer: CanvasLayerKind,
    ) -> impl Iterator<Item = (&PathPrimitive, Color)> {
        self.layer_commands(layer).filter_map(|command| match command {
            DrawCommand::Fill { path, color, .. } => Some((path, *color)),
            _ => None,
        })
    }

    /// Stroked paths on `layer` together with their colors.
    pub fn strokes_on(
        &self,
        layer: CanvasLayerKind,
    ) -> impl Iterator<Item = (&PathPrimitive, Color)> {
        self.layer_commands(layer).filter_map(|command| match command {
            DrawCommand::Stroke { path, color, .. } => Some((path, *color)),
            _ => None,
        })
    }

    pub fn texts_on(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &TextPrimitive> {
        self.layer_commands(layer).filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if !self.viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clears `surface` and replays every command onto it.
    ///
    /// Layers are painted in `CanvasLayerKind::paint_order`; commands within
    /// a layer keep their push order.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> WidgetResult<()> {
        self.validate()?;
        surface.clear(self.viewport, self.background)?;
        for layer in CanvasLayerKind::paint_order() {
            for command in self.layer_commands(layer) {
                match command {
                    DrawCommand::Fill { path, color, .. } => surface.fill_path(path, *color)?,
                    DrawCommand::Stroke {
                        path, color, width, ..
                    } => surface.stroke_path(path, *color, *width)?,
                    DrawCommand::Text { text, .. } => surface.draw_text(text)?,
                }
            }
        }
        Ok(())
    }
}
