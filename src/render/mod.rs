mod frame;
mod layer;
mod primitives;
mod recording_surface;

pub use frame::{DrawCommand, RenderFrame};
pub use layer::CanvasLayerKind;
pub use primitives::{Color, Palette, PathCommand, PathPrimitive, TextHAlign, TextPrimitive};
pub use recording_surface::{RecordingSurface, SurfaceOp};

use crate::core::Viewport;
use crate::error::WidgetResult;

/// Capability set of a 2D drawing target.
///
/// Chart and toast layout code never talks to a backend directly; it builds a
/// `RenderFrame` which is replayed through these operations.
pub trait DrawingSurface {
    /// Resets the surface to `viewport` size, filled with `color`.
    fn clear(&mut self, viewport: Viewport, color: Color) -> WidgetResult<()>;
    fn fill_path(&mut self, path: &PathPrimitive, color: Color) -> WidgetResult<()>;
    fn stroke_path(&mut self, path: &PathPrimitive, color: Color, width: f64) -> WidgetResult<()>;
    fn draw_text(&mut self, text: &TextPrimitive) -> WidgetResult<()>;
}

/// Contract implemented by anything able to present a full frame.
///
/// Every `DrawingSurface` is a renderer by replaying the frame onto itself.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> WidgetResult<()>;
}

impl<S: DrawingSurface> Renderer for S {
    fn render(&mut self, frame: &RenderFrame) -> WidgetResult<()> {
        frame.replay(self)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
