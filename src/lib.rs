//! widget-rs: headless UI component core.
//!
//! Two independent subsystems share one rendering abstraction:
//! - `toast`: a capacity-bounded, deduplicated notification queue with
//!   auto-dismiss timers driven by an injected clock.
//! - `core` + `api`: chart layout (pie, donut, area, polar-area and
//!   multi-series) producing deterministic `RenderFrame`s that any
//!   `render::DrawingSurface` can replay.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod toast;

pub use api::{ChartOptions, ChartSpec, render_chart};
pub use error::{WidgetError, WidgetResult};
pub use toast::{ToastConfig, ToastManager};
