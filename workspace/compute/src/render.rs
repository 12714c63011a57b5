use common::{ChartData, ChartOptions, ChartType, ReportRow, ReportType};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::adapter::{build_pie_data, build_series_data};
use crate::options::{chart_title, resolve_options};

/// Everything the chart library needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub title: String,
    pub report_type: ReportType,
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Outcome of resolving a chart for some report rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ChartRender {
    /// No rows at all, nothing is rendered
    NoData,
    /// Rows exist but produced no labels, a placeholder is rendered
    Empty { title: String },
    /// The chart kind cannot be drawn, a placeholder is rendered
    #[serde(rename_all = "camelCase")]
    Unsupported { title: String, chart_type: String },
    Rendered(ChartPayload),
}

impl ChartRender {
    pub fn title(&self) -> Option<&str> {
        match self {
            ChartRender::NoData => None,
            ChartRender::Empty { title } | ChartRender::Unsupported { title, .. } => {
                Some(title.as_str())
            }
            ChartRender::Rendered(payload) => Some(payload.title.as_str()),
        }
    }
}

/// Runs the rendering state machine for a report type, a chart kind key and rows.
///
/// Unknown chart kinds are shaped like line and bar charts before they end up
/// as [`ChartRender::Unsupported`], so empty data still reads as empty.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn resolve_render(report_type: ReportType, chart_key: &str, rows: &[ReportRow]) -> ChartRender {
    let chart_type = chart_key.parse::<ChartType>();

    let data = match chart_type {
        Ok(ChartType::Pie) => build_pie_data(report_type, rows),
        _ => build_series_data(report_type, rows),
    };
    let Some(data) = data else {
        return ChartRender::NoData;
    };

    let title = chart_title(report_type.as_str(), chart_key);
    if data.is_empty() {
        debug!(%title, "Chart data has no labels");
        return ChartRender::Empty { title };
    }

    match chart_type {
        Ok(chart_type) => ChartRender::Rendered(ChartPayload {
            title,
            report_type,
            chart_type,
            data,
            options: resolve_options(report_type, chart_type),
        }),
        Err(err) => {
            debug!(%err, "Chart kind cannot be drawn");
            ChartRender::Unsupported {
                title,
                chart_type: chart_key.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lead_rows, pipeline_rows, sales_rows};

    #[test]
    fn test_no_rows_is_no_data() {
        for chart_key in ["line", "bar", "pie", "radar"] {
            assert_eq!(resolve_render(ReportType::Sales, chart_key, &[]), ChartRender::NoData);
        }
        assert_eq!(ChartRender::NoData.title(), None);
    }

    #[test]
    fn test_line_chart_is_rendered() {
        let render = resolve_render(ReportType::Sales, "line", &sales_rows());

        let payload = match render {
            ChartRender::Rendered(payload) => payload,
            other => panic!("expected a rendered chart, got {:?}", other),
        };
        assert_eq!(payload.title, "Sales Line Chart");
        assert_eq!(payload.chart_type, ChartType::Line);
        assert_eq!(payload.data.labels.len(), 3);
        assert_eq!(payload.options.scales.unwrap().y.title, "Revenue ($)");
    }

    #[test]
    fn test_pie_chart_is_rendered_from_categories() {
        let render = resolve_render(ReportType::Leads, "pie", &lead_rows());

        let payload = match render {
            ChartRender::Rendered(payload) => payload,
            other => panic!("expected a rendered chart, got {:?}", other),
        };
        assert_eq!(payload.title, "Leads Pie Chart");
        assert_eq!(payload.data.labels, vec!["New", "Qualified"]);
        assert_eq!(payload.options.scales, None);
    }

    #[test]
    fn test_pie_without_categories_is_empty() {
        let render = resolve_render(ReportType::Sales, "pie", &sales_rows());
        assert_eq!(
            render,
            ChartRender::Empty {
                title: "Sales Pie Chart".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_chart_kind_is_unsupported() {
        let render = resolve_render(ReportType::Opportunities, "radar", &pipeline_rows());
        assert_eq!(
            render,
            ChartRender::Unsupported {
                title: "Opportunities Radar Chart".to_string(),
                chart_type: "radar".to_string(),
            }
        );
        assert_eq!(render.title(), Some("Opportunities Radar Chart"));
    }

    #[test]
    fn test_render_serializes_with_state_tag() {
        let json = serde_json::to_value(resolve_render(ReportType::Sales, "bar", &sales_rows())).unwrap();
        assert_eq!(json["state"], "rendered");
        assert_eq!(json["chartType"], "bar");
        assert_eq!(json["data"]["datasets"][0]["label"], "Revenue");
        assert_eq!(json["options"]["scales"]["x"]["title"], "Period");

        let json = serde_json::to_value(ChartRender::NoData).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "noData" }));
    }
}
