use approx::assert_abs_diff_eq;
use widget_rs::api::{ChartOptions, build_multi_series_frame};
use widget_rs::core::{
    DataPoint, MultiSeriesMode, PlotArea, Series, Viewport, category_labels, multi_series_domain,
    project_grouped_bars,
};
use widget_rs::render::{CanvasLayerKind, Color};

fn series(label: &str, values: &[f64]) -> Series {
    Series::new(
        label,
        values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(format!("c{index}"), *value))
            .collect(),
    )
}

fn two_by_three() -> Vec<Series> {
    vec![series("first", &[1.0, 2.0, 3.0]), series("second", &[4.0, 5.0, 6.0])]
}

fn options() -> ChartOptions {
    // Plot area: left/top 30, 400x300.
    ChartOptions::new(460, 360).with_padding(30.0)
}

#[test]
fn bar_mode_draws_one_bar_per_point_in_series_colors() {
    let frame =
        build_multi_series_frame(&two_by_three(), MultiSeriesMode::Bar, &options()).expect("frame");

    let fills: Vec<Color> = frame
        .fills_on(CanvasLayerKind::Series)
        .map(|(_, color)| color)
        .collect();
    assert_eq!(fills.len(), 6);

    let first = Color::parse("#FF6384").expect("color");
    let second = Color::parse("#36A2EB").expect("color");
    assert_eq!(fills[..3], [first, first, first]);
    assert_eq!(fills[3..], [second, second, second]);
    assert_ne!(first, second);
}

#[test]
fn grouped_bars_share_bands_and_grow_from_zero() {
    let plot = PlotArea::inset(Viewport::new(460, 360), 30.0);
    let data = two_by_three();
    let domain = multi_series_domain(&data, MultiSeriesMode::Bar)
        .expect("domain")
        .expect("non-empty");
    assert_eq!(domain.min(), 0.0);
    assert_eq!(domain.max(), 6.0);

    let bars = project_grouped_bars(&data, plot, domain, 0.8).expect("bars");
    assert_eq!(bars.len(), 6);

    let band = 400.0 / 3.0;
    let bar_width = band * 0.8 / 2.0;
    let first = bars[0];
    assert_abs_diff_eq!(first.x, 30.0 + band * 0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(first.width, bar_width, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, 280.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.height, 50.0, epsilon = 1e-9);

    // Second series sits directly right of the first in the same band.
    let paired = bars
        .iter()
        .find(|bar| bar.series_index == 1 && bar.point_index == 0)
        .expect("paired bar");
    assert_abs_diff_eq!(paired.x, first.x + bar_width, epsilon = 1e-9);
    assert_abs_diff_eq!(paired.y + paired.height, 330.0, epsilon = 1e-9);
}

#[test]
fn negative_bars_hang_below_zero_line() {
    let plot = PlotArea::inset(Viewport::new(460, 360), 30.0);
    let data = vec![series("mixed", &[-2.0, 3.0])];
    let domain = multi_series_domain(&data, MultiSeriesMode::Bar)
        .expect("domain")
        .expect("non-empty");
    let bars = project_grouped_bars(&data, plot, domain, 1.0).expect("bars");

    let zero_y = domain.value_to_y(0.0, plot);
    assert_abs_diff_eq!(bars[0].y, zero_y, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].height, 120.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].y + bars[1].height, zero_y, epsilon = 1e-9);
}

#[test]
fn line_mode_strokes_each_series() {
    let frame = build_multi_series_frame(
        &two_by_three(),
        MultiSeriesMode::Line,
        &options().with_points(false),
    )
    .expect("frame");

    assert_eq!(frame.strokes_on(CanvasLayerKind::Series).count(), 2);
    assert_eq!(frame.fills_on(CanvasLayerKind::Series).count(), 0);
}

#[test]
fn area_mode_fills_below_each_series() {
    let frame = build_multi_series_frame(
        &two_by_three(),
        MultiSeriesMode::Area,
        &options().with_points(false),
    )
    .expect("frame");

    let second = Color::parse("#36A2EB").expect("color");
    let fills: Vec<Color> = frame
        .fills_on(CanvasLayerKind::Series)
        .map(|(_, color)| color)
        .collect();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[1], second.with_alpha(0.2));
}

#[test]
fn legend_has_one_swatch_per_series() {
    let frame =
        build_multi_series_frame(&two_by_three(), MultiSeriesMode::Line, &options()).expect("frame");

    let labels: Vec<&str> = frame
        .texts_on(CanvasLayerKind::Legend)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["first", "second"]);
    assert_eq!(frame.fills_on(CanvasLayerKind::Legend).count(), 2);
}

#[test]
fn series_colors_cycle_past_palette_length() {
    let data = vec![
        series("a", &[1.0]),
        series("b", &[2.0]),
        series("c", &[3.0]),
    ];
    let options = options().with_colors(["#000", "#fff"]);
    let frame = build_multi_series_frame(&data, MultiSeriesMode::Bar, &options).expect("frame");

    let fills: Vec<Color> = frame
        .fills_on(CanvasLayerKind::Series)
        .map(|(_, color)| color)
        .collect();
    assert_eq!(fills, vec![Color::BLACK, Color::WHITE, Color::BLACK]);
}

#[test]
fn category_labels_come_from_longest_coverage() {
    let data = vec![series("short", &[1.0]), series("long", &[1.0, 2.0, 3.0])];
    assert_eq!(category_labels(&data), vec!["c0", "c1", "c2"]);
}

#[test]
fn empty_series_render_legend_only() {
    let data = vec![Series::new("empty", Vec::new())];
    let frame = build_multi_series_frame(&data, MultiSeriesMode::Line, &options()).expect("frame");
    assert_eq!(frame.layer_commands(CanvasLayerKind::Series).count(), 0);
    assert_eq!(frame.layer_commands(CanvasLayerKind::Grid).count(), 0);
    assert_eq!(frame.fills_on(CanvasLayerKind::Legend).count(), 1);

    let nothing = build_multi_series_frame(&[], MultiSeriesMode::Bar, &options()).expect("frame");
    assert!(nothing.is_empty());
}
