use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_abs_diff_eq;
use widget_rs::api::{ChartOptions, build_donut_frame, build_pie_frame};
use widget_rs::core::{DataPoint, PIE_START_ANGLE, project_pie_slices};
use widget_rs::render::{CanvasLayerKind, Color};

fn quarter_split() -> Vec<DataPoint> {
    vec![DataPoint::new("A", 1.0), DataPoint::new("B", 3.0)]
}

#[test]
fn slice_sweeps_are_proportional_to_total() {
    let slices = project_pie_slices(&quarter_split(), (200.0, 150.0), 100.0, 0.0).expect("slices");
    assert_eq!(slices.len(), 2);

    assert_abs_diff_eq!(slices[0].sweep().to_degrees(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[1].sweep().to_degrees(), 270.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slices[0].fraction, 0.25, epsilon = 1e-12);
}

#[test]
fn sweep_starts_at_twelve_o_clock_and_is_cumulative() {
    let slices = project_pie_slices(&quarter_split(), (0.0, 0.0), 10.0, 0.0).expect("slices");

    assert_eq!(slices[0].start_angle, PIE_START_ANGLE);
    assert_abs_diff_eq!(slices[0].start_angle, -FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(slices[0].end_angle, 0.0, epsilon = 1e-12);
    assert_eq!(slices[1].start_angle, slices[0].end_angle);
    assert_abs_diff_eq!(slices[1].end_angle, PI + FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(
        slices[1].end_angle - slices[0].start_angle,
        TAU,
        epsilon = 1e-12
    );
}

#[test]
fn zero_total_yields_no_slices() {
    let data = vec![DataPoint::new("A", 0.0), DataPoint::new("B", 0.0)];
    let slices = project_pie_slices(&data, (0.0, 0.0), 10.0, 0.0).expect("slices");
    assert!(slices.is_empty());
}

#[test]
fn negative_and_non_finite_values_are_rejected() {
    let negative = vec![DataPoint::new("A", 2.0), DataPoint::new("B", -1.0)];
    assert!(project_pie_slices(&negative, (0.0, 0.0), 10.0, 0.0).is_err());

    let nan = vec![DataPoint::new("A", f64::NAN)];
    assert!(project_pie_slices(&nan, (0.0, 0.0), 10.0, 0.0).is_err());
}

#[test]
fn invalid_radii_are_rejected() {
    assert!(project_pie_slices(&quarter_split(), (0.0, 0.0), 0.0, 0.0).is_err());
    assert!(project_pie_slices(&quarter_split(), (0.0, 0.0), 10.0, 10.0).is_err());
}

#[test]
fn pie_frame_fills_one_slice_per_value_in_palette_order() {
    let options = ChartOptions::default();
    let frame = build_pie_frame(&quarter_split(), &options).expect("frame");

    let fills: Vec<Color> = frame
        .fills_on(CanvasLayerKind::Series)
        .map(|(_, color)| color)
        .collect();
    let expected = [
        Color::parse("#FF6384").expect("color"),
        Color::parse("#36A2EB").expect("color"),
    ];
    assert_eq!(fills, expected);
}

#[test]
fn pie_frame_labels_percentages_and_legend() {
    let frame = build_pie_frame(&quarter_split(), &ChartOptions::default()).expect("frame");

    let labels: Vec<&str> = frame
        .texts_on(CanvasLayerKind::Label)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["25%", "75%"]);

    let legend: Vec<&str> = frame
        .texts_on(CanvasLayerKind::Legend)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(legend, vec!["A", "B"]);
    assert_eq!(frame.fills_on(CanvasLayerKind::Legend).count(), 2);
}

#[test]
fn pie_frame_without_labels_or_legend() {
    let options = ChartOptions::default().with_labels(false).with_legend(false);
    let frame = build_pie_frame(&quarter_split(), &options).expect("frame");
    assert_eq!(frame.layer_commands(CanvasLayerKind::Label).count(), 0);
    assert_eq!(frame.layer_commands(CanvasLayerKind::Legend).count(), 0);
}

#[test]
fn colors_cycle_when_categories_exceed_palette() {
    let data = vec![
        DataPoint::new("A", 1.0),
        DataPoint::new("B", 1.0),
        DataPoint::new("C", 1.0),
    ];
    let options = ChartOptions::default().with_colors(["#000000", "#ffffff"]);
    let frame = build_pie_frame(&data, &options).expect("frame");

    let fills: Vec<Color> = frame
        .fills_on(CanvasLayerKind::Series)
        .map(|(_, color)| color)
        .collect();
    assert_eq!(fills, vec![Color::BLACK, Color::WHITE, Color::BLACK]);
}

#[test]
fn empty_pie_renders_background_only() {
    let frame = build_pie_frame(&[], &ChartOptions::default()).expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn donut_slices_carve_inner_radius_and_show_total() {
    let options = ChartOptions::default().with_inner_radius_ratio(0.5);
    let frame = build_donut_frame(&quarter_split(), &options).expect("frame");

    assert_eq!(frame.fills_on(CanvasLayerKind::Series).count(), 2);
    let labels: Vec<&str> = frame
        .texts_on(CanvasLayerKind::Label)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["25%", "75%", "4"]);

    // Default 400x300 with 40px padding: outer radius 110, inner 55.
    let slices = project_pie_slices(&quarter_split(), (200.0, 150.0), 110.0, 55.0).expect("slices");
    let (path, _) = frame
        .fills_on(CanvasLayerKind::Series)
        .next()
        .expect("first slice");
    assert_eq!(*path, slices[0].to_path());
}

#[test]
fn huge_values_still_split_the_circle() {
    let data = vec![DataPoint::new("A", 1e308), DataPoint::new("B", 1e308)];
    let slices = project_pie_slices(&data, (0.0, 0.0), 10.0, 0.0).expect("slices");
    assert_eq!(slices.len(), 2);
    assert_abs_diff_eq!(slices[0].fraction, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(slices[0].sweep() + slices[1].sweep(), TAU, epsilon = 1e-9);

    let options = ChartOptions::default().with_labels(false).with_legend(false);
    let frame = build_pie_frame(&data, &options).expect("frame");
    assert_eq!(frame.fills_on(CanvasLayerKind::Series).count(), 2);
    assert!(frame.validate().is_ok());
}

#[test]
fn donut_omits_total_that_overflows() {
    let data = vec![DataPoint::new("A", 1e308), DataPoint::new("B", 1e308)];
    let frame = build_donut_frame(&data, &ChartOptions::default()).expect("frame");
    let labels: Vec<&str> = frame
        .texts_on(CanvasLayerKind::Label)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["50%", "50%"]);
}
