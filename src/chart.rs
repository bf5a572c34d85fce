// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-chart boundary.
//!
//! The financials page describes each chart as a [`ChartConfig`] in the
//! shape Chart.js consumes and hands it to a [`ChartRenderer`]. The
//! renderer decides how the chart reaches the page; [`ChartJs`] emits an
//! inline script that instantiates the chart on its canvas.

use crate::markup::Node;
use crate::types::SeriesPoint;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    /// Missing values serialize as `null`, which Chart.js draws as a gap.
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: AxisRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl ChartConfig {
    /// Single-dataset line chart with `Y<year>` labels.
    pub fn line(label: &str, points: &[SeriesPoint]) -> Self {
        Self {
            kind: "line",
            data: ChartData {
                labels: points.iter().map(SeriesPoint::label).collect(),
                datasets: vec![Dataset {
                    label: label.to_string(),
                    data: points.iter().map(|p| p.value).collect(),
                    fill: false,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                scales: None,
            },
        }
    }

    pub fn filled(mut self) -> Self {
        for dataset in &mut self.data.datasets {
            dataset.fill = true;
        }
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.options.scales = Some(Scales {
            y: AxisRange { min, max },
        });
        self
    }
}

pub trait ChartRenderer {
    /// Produce whatever markup draws `config` onto the canvas `canvas_id`.
    fn line_chart(&mut self, canvas_id: &str, config: &ChartConfig) -> Node;
}

/// Emits `new Chart(canvas, config)` as an inline script. The page must
/// load the Chart.js bundle before the script runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJs;

impl ChartRenderer for ChartJs {
    fn line_chart(&mut self, canvas_id: &str, config: &ChartConfig) -> Node {
        let encoded = serde_json::to_string(canvas_id)
            .and_then(|id| serde_json::to_string(config).map(|cfg| (id, cfg)));
        match encoded {
            Ok((id, cfg)) => Node::script(&format!(
                "new Chart(document.getElementById({}), {});",
                id, cfg
            )),
            Err(err) => {
                warn!(canvas_id, error = %err, "chart config could not be encoded");
                Node::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<SeriesPoint> {
        vec![SeriesPoint::new(1, 100.0), SeriesPoint::new(2, 250.0)]
    }

    #[test]
    fn line_config_shape() {
        let config = ChartConfig::line("Revenue (EUR)", &points());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["labels"], serde_json::json!(["Y1", "Y2"]));
        assert_eq!(json["data"]["datasets"][0]["label"], "Revenue (EUR)");
        assert_eq!(json["data"]["datasets"][0]["data"], serde_json::json!([100.0, 250.0]));
        assert!(json["data"]["datasets"][0].get("fill").is_none());
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert!(json["options"].get("scales").is_none());
    }

    #[test]
    fn y_range_and_fill() {
        let config = ChartConfig::line("GM %", &points()).y_range(0.0, 100.0).filled();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["options"]["scales"]["y"]["min"], 0.0);
        assert_eq!(json["options"]["scales"]["y"]["max"], 100.0);
        assert_eq!(json["data"]["datasets"][0]["fill"], true);
    }

    #[test]
    fn chartjs_emits_inline_script() {
        let html = ChartJs
            .line_chart("chart-rev", &ChartConfig::line("Revenue (EUR)", &points()))
            .to_html();
        assert!(html.starts_with("<script>new Chart(document.getElementById(\"chart-rev\"), {"));
        assert!(html.ends_with(");</script>"));
    }
}
