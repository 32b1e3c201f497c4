pub mod area;
pub mod axis;
pub mod domain;
pub mod multi_series;
pub mod pie;
pub mod polar_area;
pub mod types;

pub use area::{AreaGeometry, AreaVertex, category_x, project_area_geometry};
pub use axis::{ValueTick, format_tick_value, value_ticks};
pub use domain::ValueDomain;
pub use multi_series::{
    GroupedBar, MultiSeriesMode, SeriesPolyline, category_band_center, category_count,
    category_labels, multi_series_domain, project_grouped_bars, project_series_polylines,
};
pub use pie::{PIE_START_ANGLE, PieSlice, project_pie_slices};
pub use polar_area::{PolarWedge, polar_ring_radii, project_polar_wedges};
pub use types::{DataPoint, PlotArea, Series, Viewport};
