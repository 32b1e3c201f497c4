use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, MultiSeriesMode, Series};
use crate::error::{WidgetError, WidgetResult};
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartOptions, build_area_frame, build_donut_frame, build_multi_series_frame, build_pie_frame,
    build_polar_area_frame,
};

/// Chart kind together with the data it plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie {
        data: Vec<DataPoint>,
    },
    Donut {
        data: Vec<DataPoint>,
    },
    Area {
        data: Vec<DataPoint>,
    },
    PolarArea {
        data: Vec<DataPoint>,
    },
    MultiSeries {
        series: Vec<Series>,
        #[serde(default)]
        mode: MultiSeriesMode,
    },
}

impl ChartSpec {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Pie { .. } => "pie",
            Self::Donut { .. } => "donut",
            Self::Area { .. } => "area",
            Self::PolarArea { .. } => "polar_area",
            Self::MultiSeries { .. } => "multi_series",
        }
    }

    /// Lays out the full frame for this chart. Pure: equal inputs give equal frames.
    pub fn build_frame(&self, options: &ChartOptions) -> WidgetResult<RenderFrame> {
        match self {
            Self::Pie { data } => build_pie_frame(data, options),
            Self::Donut { data } => build_donut_frame(data, options),
            Self::Area { data } => build_area_frame(data, options),
            Self::PolarArea { data } => build_polar_area_frame(data, options),
            Self::MultiSeries { series, mode } => build_multi_series_frame(series, *mode, options),
        }
    }
}

/// Self-contained render request as embedded in page markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub chart: ChartSpec,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartRequest {
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidData(format!("failed to parse chart request: {e}")))
    }

    pub fn to_json_pretty(&self) -> WidgetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            WidgetError::InvalidData(format!("failed to serialize chart request: {e}"))
        })
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> WidgetResult<()> {
        render_chart(renderer, &self.chart, &self.options)
    }
}

/// Clears `renderer` and draws `spec` with `options` onto it.
pub fn render_chart<R: Renderer + ?Sized>(
    renderer: &mut R,
    spec: &ChartSpec,
    options: &ChartOptions,
) -> WidgetResult<()> {
    let frame = spec.build_frame(options)?;
    debug!(
        kind = spec.kind_name(),
        commands = frame.commands.len(),
        "render chart"
    );
    renderer.render(&frame)
}

#[cfg(test)]
mod tests {
    use super::{ChartRequest, ChartSpec};
    use crate::core::MultiSeriesMode;

    #[test]
    fn request_json_uses_type_tag() {
        let request = ChartRequest::from_json_str(
            r#"{
                "chart": {"type": "multi_series", "series": [
                    {"label": "a", "data": [{"label": "x", "value": 1.0}]}
                ], "mode": "bar"},
                "options": {"width": 320, "height": 200}
            }"#,
        )
        .expect("parse request");

        match &request.chart {
            ChartSpec::MultiSeries { series, mode } => {
                assert_eq!(series.len(), 1);
                assert_eq!(*mode, MultiSeriesMode::Bar);
            }
            other => panic!("unexpected chart kind: {}", other.kind_name()),
        }
        assert_eq!(request.options.width, 320);
    }

    #[test]
    fn request_json_round_trip_preserves_spec() {
        let request = ChartRequest::from_json_str(
            r#"{"chart": {"type": "pie", "data": [{"label": "A", "value": 2.0}]}}"#,
        )
        .expect("parse request");
        let json = request.to_json_pretty().expect("serialize");
        let reparsed = ChartRequest::from_json_str(&json).expect("reparse");
        assert_eq!(reparsed, request);
    }

    #[test]
    fn unknown_chart_type_is_rejected() {
        let result = ChartRequest::from_json_str(r#"{"chart": {"type": "radar", "data": []}}"#);
        assert!(result.is_err());
    }
}
