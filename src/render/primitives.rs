use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{WidgetError, WidgetResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Same color with a replaced alpha channel.
    ///
    /// Used for translucent fills derived from a stroke color.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Parses a CSS-style color string.
    ///
    /// Accepted forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)` with 0..=255 color channels and a 0..=1 alpha.
    pub fn parse(input: &str) -> WidgetResult<Self> {
        let trimmed = input.trim();
        let invalid = || WidgetError::InvalidColor(input.to_owned());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
            return match hex.len() {
                3 => {
                    let mut rgb = [0_u8; 3];
                    for (slot, index) in rgb.iter_mut().zip(0..3) {
                        *slot = channel(&hex[index..=index])? * 17;
                    }
                    Ok(Self::from_rgb8(rgb[0], rgb[1], rgb[2]))
                }
                6 | 8 => {
                    let base = Self::from_rgb8(
                        channel(&hex[0..2])?,
                        channel(&hex[2..4])?,
                        channel(&hex[4..6])?,
                    );
                    if hex.len() == 8 {
                        Ok(base.with_alpha(f64::from(channel(&hex[6..8])?) / 255.0))
                    } else {
                        Ok(base)
                    }
                }
                _ => Err(invalid()),
            };
        }

        let lowered = trimmed.to_ascii_lowercase();
        let (body, expects_alpha) = if let Some(rest) = lowered.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lowered.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;

        let parts = body
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<WidgetResult<Vec<f64>>>()?;
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }
        for channel in &parts[..3] {
            if !channel.is_finite() || !(0.0..=255.0).contains(channel) {
                return Err(invalid());
            }
        }
        let alpha = parts.get(3).copied().unwrap_or(1.0);
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }

        Ok(Self::rgba(
            parts[0] / 255.0,
            parts[1] / 255.0,
            parts[2] / 255.0,
            alpha,
        ))
    }

    pub fn validate(self) -> WidgetResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WidgetError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Ordered color list cycled across categories or series.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> WidgetResult<Self> {
        if colors.is_empty() {
            return Err(WidgetError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    pub fn parse<S: AsRef<str>>(colors: &[S]) -> WidgetResult<Self> {
        let parsed = colors
            .iter()
            .map(|color| Color::parse(color.as_ref()))
            .collect::<WidgetResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Color for `index`, wrapping modulo the palette length.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// One step of a path outline in pixel space.
///
/// Angles are radians measured from the positive x axis with y pointing
/// down, so increasing angles sweep clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    Close,
}

impl PathCommand {
    fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::Arc {
                cx,
                cy,
                radius,
                start_angle,
                end_angle,
                ..
            } => [cx, cy, radius, start_angle, end_angle]
                .iter()
                .all(|value| value.is_finite()),
            Self::Close => true,
        }
    }
}

/// Path outline consumed by fill and stroke operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    commands: SmallVec<[PathCommand; 8]>,
}

impl PathPrimitive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    #[must_use]
    pub fn arc(
        mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
            counter_clockwise,
        });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Open polyline through `points`.
    #[must_use]
    pub fn polyline(points: &[(f64, f64)]) -> Self {
        let mut path = Self::new();
        for (index, &(x, y)) in points.iter().enumerate() {
            path = if index == 0 {
                path.move_to(x, y)
            } else {
                path.line_to(x, y)
            };
        }
        path
    }

    #[must_use]
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        if points.is_empty() {
            return Self::new();
        }
        Self::polyline(points).close()
    }

    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::polygon(&[
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ])
    }

    #[must_use]
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new()
            .move_to(cx + radius, cy)
            .arc(cx, cy, radius, 0.0, std::f64::consts::TAU, false)
            .close()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.commands.iter().all(|command| command.is_finite()) {
            Ok(())
        } else {
            Err(WidgetError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ))
        }
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the top edge of the text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.text.is_empty() {
            return Err(WidgetError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(WidgetError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(WidgetError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
