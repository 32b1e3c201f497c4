use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Viewport;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{Color, DrawingSurface, PathCommand, PathPrimitive, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub fills: usize,
    pub strokes: usize,
    pub texts: usize,
}

/// Cairo + Pango + PangoCairo drawing surface backed by an ARGB32 image.
///
/// `clear` recreates the image when the requested viewport differs from the
/// current size, so one surface can serve charts of varying dimensions.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(viewport: Viewport) -> WidgetResult<Self> {
        let (surface, context) = create_surface(viewport)?;
        Ok(Self {
            surface,
            context,
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Counters accumulated since the last clear.
    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    /// Copy of the raw ARGB32 pixel buffer, row stride included.
    pub fn pixels(&self) -> WidgetResult<Vec<u8>> {
        self.surface.flush();
        let mut pixels = Vec::new();
        self.surface
            .with_data(|data| pixels.extend_from_slice(data))
            .map_err(|err| WidgetError::Backend(format!("failed to read pixels: {err}")))?;
        Ok(pixels)
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> WidgetResult<()> {
        let mut file = File::create(path.as_ref()).map_err(|err| {
            WidgetError::Backend(format!(
                "failed to create {}: {err}",
                path.as_ref().display()
            ))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| WidgetError::Backend(format!("failed to encode png: {err}")))
    }

    fn append_path(&self, path: &PathPrimitive) {
        self.context.new_path();
        for command in path.commands() {
            match *command {
                PathCommand::MoveTo { x, y } => self.context.move_to(x, y),
                PathCommand::LineTo { x, y } => self.context.line_to(x, y),
                PathCommand::Arc {
                    cx,
                    cy,
                    radius,
                    start_angle,
                    end_angle,
                    counter_clockwise,
                } => {
                    if counter_clockwise {
                        self.context
                            .arc_negative(cx, cy, radius, start_angle, end_angle);
                    } else {
                        self.context.arc(cx, cy, radius, start_angle, end_angle);
                    }
                }
                PathCommand::Close => self.context.close_path(),
            }
        }
    }
}

impl DrawingSurface for CairoSurface {
    fn clear(&mut self, viewport: Viewport, color: Color) -> WidgetResult<()> {
        if !viewport.is_valid() {
            return Err(WidgetError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let current = (self.surface.width(), self.surface.height());
        if current != (viewport_dimension(viewport.width)?, viewport_dimension(viewport.height)?)
        {
            let (surface, context) = create_surface(viewport)?;
            self.surface = surface;
            self.context = context;
        }

        self.context.save().map_err(map_cairo_error("save"))?;
        self.context.set_operator(cairo::Operator::Source);
        apply_color(&self.context, color);
        self.context.paint().map_err(map_cairo_error("clear"))?;
        self.context.restore().map_err(map_cairo_error("restore"))?;
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    fn fill_path(&mut self, path: &PathPrimitive, color: Color) -> WidgetResult<()> {
        self.append_path(path);
        apply_color(&self.context, color);
        self.context.fill().map_err(map_cairo_error("fill"))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn stroke_path(&mut self, path: &PathPrimitive, color: Color, width: f64) -> WidgetResult<()> {
        self.append_path(path);
        apply_color(&self.context, color);
        self.context.set_line_width(width);
        self.context.stroke().map_err(map_cairo_error("stroke"))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> WidgetResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        self.context.new_path();
        apply_color(&self.context, text.color);
        self.context.move_to(x, text.y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts += 1;
        Ok(())
    }
}

fn create_surface(viewport: Viewport) -> WidgetResult<(ImageSurface, Context)> {
    if !viewport.is_valid() {
        return Err(WidgetError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let surface = ImageSurface::create(
        Format::ARgb32,
        viewport_dimension(viewport.width)?,
        viewport_dimension(viewport.height)?,
    )
    .map_err(map_cairo_error("create surface"))?;
    let context = Context::new(&surface).map_err(map_cairo_error("create context"))?;
    Ok((surface, context))
}

fn viewport_dimension(value: u32) -> WidgetResult<i32> {
    i32::try_from(value)
        .map_err(|_| WidgetError::Backend(format!("surface dimension {value} exceeds i32")))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_cairo_error(operation: &'static str) -> impl Fn(cairo::Error) -> WidgetError {
    move |err| WidgetError::Backend(format!("cairo {operation} failed: {err}"))
}
