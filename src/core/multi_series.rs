use serde::{Deserialize, Serialize};

use crate::core::area::{close_to_baseline, project_polyline};
use crate::core::types::ensure_finite_values;
use crate::core::{AreaVertex, PlotArea, Series, ValueDomain};
use crate::error::{WidgetError, WidgetResult};

/// Visual encoding shared by every series of a multi-series chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiSeriesMode {
    #[default]
    Line,
    Bar,
    Area,
}

/// Number of categories on the x axis: the longest series length.
#[must_use]
pub fn category_count(series: &[Series]) -> usize {
    series.iter().map(|s| s.data.len()).max().unwrap_or(0)
}

/// Category labels taken from the first series that provides each index.
#[must_use]
pub fn category_labels(series: &[Series]) -> Vec<String> {
    (0..category_count(series))
        .map(|index| {
            series
                .iter()
                .find_map(|s| s.data.get(index))
                .map(|point| point.label.clone())
                .unwrap_or_default()
        })
        .collect()
}

/// Value domain over every series. Bars always include the zero baseline.
pub fn multi_series_domain(
    series: &[Series],
    mode: MultiSeriesMode,
) -> WidgetResult<Option<ValueDomain>> {
    for s in series {
        ensure_finite_values(&s.data)?;
    }
    let domain = ValueDomain::from_values(
        series
            .iter()
            .flat_map(|s| s.data.iter().map(|point| point.value)),
    );
    Ok(match mode {
        MultiSeriesMode::Bar => domain.map(ValueDomain::with_zero),
        MultiSeriesMode::Line | MultiSeriesMode::Area => domain,
    })
}

/// Projected outline of one series in line or area mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPolyline {
    pub series_index: usize,
    pub line_points: Vec<AreaVertex>,
    /// Closed polygon against the plot bottom; empty unless projected for area mode.
    pub fill_polygon: Vec<AreaVertex>,
}

/// Projects each series to a polyline over shared category positions.
pub fn project_series_polylines(
    series: &[Series],
    plot: PlotArea,
    domain: ValueDomain,
    with_fill: bool,
) -> WidgetResult<Vec<SeriesPolyline>> {
    let count = category_count(series);
    series
        .iter()
        .enumerate()
        .map(|(series_index, s)| {
            ensure_finite_values(&s.data)?;
            let line_points = project_polyline(&s.data, count, plot, domain);
            let fill_polygon = if with_fill {
                close_to_baseline(&line_points, plot.bottom())
            } else {
                Vec::new()
            };
            Ok(SeriesPolyline {
                series_index,
                line_points,
                fill_polygon,
            })
        })
        .collect()
}

/// Bar rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupedBar {
    pub series_index: usize,
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Center x of category band `index` when bands split the plot evenly.
#[must_use]
pub fn category_band_center(index: usize, count: usize, plot: PlotArea) -> f64 {
    if count == 0 {
        return plot.left + plot.width / 2.0;
    }
    let band = plot.width / count as f64;
    plot.left + band * (index as f64 + 0.5)
}

/// Projects every point of every series into side-by-side bars.
///
/// Each category band reserves `group_fill_ratio` of its width for bars and
/// divides it evenly between series, in series order. Bars grow from the
/// zero line (clamped into `domain`).
pub fn project_grouped_bars(
    series: &[Series],
    plot: PlotArea,
    domain: ValueDomain,
    group_fill_ratio: f64,
) -> WidgetResult<Vec<GroupedBar>> {
    if !group_fill_ratio.is_finite() || group_fill_ratio <= 0.0 || group_fill_ratio > 1.0 {
        return Err(WidgetError::InvalidData(
            "bar group fill ratio must be in (0, 1]".to_owned(),
        ));
    }

    let count = category_count(series);
    if count == 0 || series.is_empty() {
        return Ok(Vec::new());
    }

    let band = plot.width / count as f64;
    let group_width = band * group_fill_ratio;
    let bar_width = group_width / series.len() as f64;
    let group_offset = (band - group_width) / 2.0;
    let baseline_y = domain.value_to_y(0.0_f64.clamp(domain.min(), domain.max()), plot);

    let mut bars = Vec::with_capacity(series.len() * count);
    for (series_index, s) in series.iter().enumerate() {
        ensure_finite_values(&s.data)?;
        for (point_index, point) in s.data.iter().enumerate() {
            let value_y = domain.value_to_y(point.value, plot);
            bars.push(GroupedBar {
                series_index,
                point_index,
                x: plot.left
                    + band * point_index as f64
                    + group_offset
                    + bar_width * series_index as f64,
                y: value_y.min(baseline_y),
                width: bar_width,
                height: (value_y - baseline_y).abs(),
            });
        }
    }

    Ok(bars)
}
