//! Chart frame builders and the toast overlay builder.
//!
//! Builders are pure: they validate options, project data through `core`
//! geometry and return a `RenderFrame`. Presenting the frame is left to a
//! `Renderer`.

mod area_render_frame_builder;
mod axis_render_frame_builder;
mod chart_options;
mod chart_spec;
mod layout_helpers;
mod legend_render_frame_builder;
mod multi_series_render_frame_builder;
mod pie_render_frame_builder;
mod polar_area_render_frame_builder;
mod toast_render_frame_builder;

pub use area_render_frame_builder::build_area_frame;
pub use chart_options::{ChartOptions, ChartStyle};
pub use chart_spec::{ChartRequest, ChartSpec, render_chart};
pub use legend_render_frame_builder::LegendEntry;
pub use multi_series_render_frame_builder::build_multi_series_frame;
pub use pie_render_frame_builder::{build_donut_frame, build_pie_frame};
pub use polar_area_render_frame_builder::build_polar_area_frame;
pub use toast_render_frame_builder::{ToastStyle, build_toast_overlay_frame};
