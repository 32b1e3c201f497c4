#![cfg(feature = "cairo-backend")]

use widget_rs::WidgetError;
use widget_rs::api::{ChartOptions, ChartSpec, render_chart};
use widget_rs::core::{DataPoint, Viewport};
use widget_rs::render::CairoSurface;

fn sample_data() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Red", 12.0),
        DataPoint::new("Blue", 19.0),
        DataPoint::new("Yellow", 3.0),
    ]
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(Viewport::new(0, 480)).expect_err("invalid width must fail");
    assert!(matches!(err, WidgetError::InvalidViewport { .. }));
}

#[test]
fn cairo_surface_renders_pie_primitives() {
    let mut surface = CairoSurface::new(Viewport::new(400, 300)).expect("surface");
    let spec = ChartSpec::Pie {
        data: sample_data(),
    };
    render_chart(&mut surface, &spec, &ChartOptions::default()).expect("render");

    let stats = surface.stats();
    assert!(stats.fills >= 3);
    assert!(stats.texts >= 3);
    assert_eq!(surface.backend_name(), "cairo+pango+pangocairo");
}

#[test]
fn cairo_surface_resizes_on_clear() {
    let mut surface = CairoSurface::new(Viewport::new(200, 150)).expect("surface");
    let spec = ChartSpec::Area {
        data: sample_data(),
    };
    render_chart(&mut surface, &spec, &ChartOptions::new(640, 360)).expect("render");

    assert_eq!(surface.surface().width(), 640);
    assert_eq!(surface.surface().height(), 360);
    assert!(surface.stats().strokes > 0);
}

#[test]
fn repeated_render_is_pixel_identical() {
    let spec = ChartSpec::Donut {
        data: sample_data(),
    };
    let options = ChartOptions::default();

    let mut first = CairoSurface::new(Viewport::new(400, 300)).expect("surface");
    render_chart(&mut first, &spec, &options).expect("first render");
    let first_pixels = first.pixels().expect("pixels");

    let mut second = CairoSurface::new(Viewport::new(400, 300)).expect("surface");
    render_chart(&mut second, &spec, &options).expect("second render");
    assert_eq!(first_pixels, second.pixels().expect("pixels"));

    render_chart(&mut first, &spec, &options).expect("re-render");
    assert_eq!(first.pixels().expect("pixels"), first_pixels);
    assert!(first_pixels.iter().any(|byte| *byte != 0));
}
