use crate::core::Viewport;
use crate::error::WidgetResult;
use crate::render::{Color, DrawingSurface, PathPrimitive, TextPrimitive};

/// Operation captured by `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear {
        viewport: Viewport,
        color: Color,
    },
    Fill {
        path: PathPrimitive,
        color: Color,
    },
    Stroke {
        path: PathPrimitive,
        color: Color,
        width: f64,
    },
    Text(TextPrimitive),
}

/// Headless surface that records every operation it receives.
///
/// A clear discards previously recorded operations, matching how a real
/// canvas loses its content on reset.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    clear_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Number of clears seen over the surface's lifetime.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Fill { .. }))
            .count()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke { .. }))
            .count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Text(_)))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport, color: Color) -> WidgetResult<()> {
        self.ops.clear();
        self.clear_count += 1;
        self.ops.push(SurfaceOp::Clear { viewport, color });
        Ok(())
    }

    fn fill_path(&mut self, path: &PathPrimitive, color: Color) -> WidgetResult<()> {
        self.ops.push(SurfaceOp::Fill {
            path: path.clone(),
            color,
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &PathPrimitive, color: Color, width: f64) -> WidgetResult<()> {
        self.ops.push(SurfaceOp::Stroke {
            path: path.clone(),
            color,
            width,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> WidgetResult<()> {
        self.ops.push(SurfaceOp::Text(text.clone()));
        Ok(())
    }
}
