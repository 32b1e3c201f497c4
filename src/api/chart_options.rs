use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{Color, Palette};

/// Per-render chart configuration.
///
/// Every field has a serde default so page-level JSON only needs to carry
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Gridline intervals on the value axis (and ring count for polar charts).
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    /// Percentage labels on slices and category labels under the plot.
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default = "default_true")]
    pub show_points: bool,
    /// Alpha of area fills derived from the series stroke color.
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: f64,
    /// Donut hole radius as a share of the outer radius.
    #[serde(default = "default_inner_radius_ratio")]
    pub inner_radius_ratio: f64,
    /// Share of each category band covered by grouped bars.
    #[serde(default = "default_bar_group_ratio")]
    pub bar_group_ratio: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            colors: default_colors(),
            background: default_background(),
            text_color: default_text_color(),
            grid_color: default_grid_color(),
            padding: default_padding(),
            font_size_px: default_font_size_px(),
            line_width: default_line_width(),
            tick_count: default_tick_count(),
            show_grid: true,
            show_legend: true,
            show_labels: true,
            show_points: true,
            fill_alpha: default_fill_alpha(),
            inner_radius_ratio: default_inner_radius_ratio(),
            bar_group_ratio: default_bar_group_ratio(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    #[must_use]
    pub fn with_inner_radius_ratio(mut self, ratio: f64) -> Self {
        self.inner_radius_ratio = ratio;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidConfig(format!("failed to parse chart options: {e}")))
    }

    /// Validates numeric fields and parses every color string.
    pub fn resolve(&self) -> WidgetResult<ChartStyle> {
        let viewport = self.viewport().ensure_valid()?;

        let checks = [
            ("padding", self.padding, self.padding >= 0.0),
            ("font_size_px", self.font_size_px, self.font_size_px > 0.0),
            ("line_width", self.line_width, self.line_width > 0.0),
            (
                "fill_alpha",
                self.fill_alpha,
                (0.0..=1.0).contains(&self.fill_alpha),
            ),
            (
                "inner_radius_ratio",
                self.inner_radius_ratio,
                (0.0..1.0).contains(&self.inner_radius_ratio),
            ),
            (
                "bar_group_ratio",
                self.bar_group_ratio,
                self.bar_group_ratio > 0.0 && self.bar_group_ratio <= 1.0,
            ),
        ];
        for (name, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(WidgetError::InvalidConfig(format!(
                    "chart option `{name}` is out of range: {value}"
                )));
            }
        }
        if self.padding * 2.0 >= f64::from(viewport.width.min(viewport.height)) {
            return Err(WidgetError::InvalidConfig(format!(
                "padding {} leaves no plot area in {}x{}",
                self.padding, viewport.width, viewport.height
            )));
        }

        Ok(ChartStyle {
            palette: Palette::parse(&self.colors)?,
            background: Color::parse(&self.background)?,
            text: Color::parse(&self.text_color)?,
            grid: Color::parse(&self.grid_color)?,
        })
    }
}

/// Parsed colors of a validated `ChartOptions`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub palette: Palette,
    pub background: Color,
    pub text: Color,
    pub grid: Color,
}

fn default_width() -> u32 {
    400
}

fn default_height() -> u32 {
    300
}

fn default_colors() -> Vec<String> {
    [
        "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_background() -> String {
    "#ffffff".to_owned()
}

fn default_text_color() -> String {
    "#333333".to_owned()
}

fn default_grid_color() -> String {
    "#e0e0e0".to_owned()
}

fn default_padding() -> f64 {
    40.0
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_line_width() -> f64 {
    2.0
}

fn default_tick_count() -> usize {
    5
}

fn default_true() -> bool {
    true
}

fn default_fill_alpha() -> f64 {
    0.2
}

fn default_inner_radius_ratio() -> f64 {
    0.5
}

fn default_bar_group_ratio() -> f64 {
    0.8
}
