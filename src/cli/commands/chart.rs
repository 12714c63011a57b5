use anyhow::{Context, Result};
use common::{ReportRow, ReportType};
use compute::{ChartRender, resolve_render};
use std::path::Path;
use tracing::{debug, info};

use crate::config::AppConfig;

pub fn parse_rows(json: &str) -> Result<Vec<ReportRow>> {
    serde_json::from_str(json).context("Report data must be a JSON array of rows")
}

/// Picks the report type and chart kind from the arguments, falling back to the configured defaults.
pub fn chart_inputs(
    config: &AppConfig,
    report_type: Option<ReportType>,
    chart_type: Option<String>,
) -> (ReportType, String) {
    let report_type = report_type
        .or(config.defaults.report_type)
        .unwrap_or_default();
    let chart_key = chart_type.unwrap_or_else(|| {
        config
            .defaults
            .chart_type
            .unwrap_or_default()
            .as_str()
            .to_string()
    });
    (report_type, chart_key)
}

pub fn render_json(render: &ChartRender, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(render)?
    } else {
        serde_json::to_string(render)?
    };
    Ok(json)
}

pub fn render_chart(
    config: &AppConfig,
    report_type: Option<ReportType>,
    chart_type: Option<String>,
    data: &Path,
    pretty: bool,
) -> Result<()> {
    let (report_type, chart_key) = chart_inputs(config, report_type, chart_type);

    debug!("Reading report rows from {}", data.display());
    let json = std::fs::read_to_string(data)
        .with_context(|| format!("Failed to read report data from {}", data.display()))?;
    let rows = parse_rows(&json)?;

    let render = resolve_render(report_type, &chart_key, &rows);
    match &render {
        ChartRender::NoData => info!("No report rows, nothing to chart"),
        ChartRender::Empty { title } => info!("{}: no data available for chart", title),
        ChartRender::Unsupported { title, chart_type } => {
            info!("{}: unsupported chart type '{}'", title, chart_type)
        }
        ChartRender::Rendered(payload) => info!(
            "{}: {} labels, {} series",
            payload.title,
            payload.data.labels.len(),
            payload.data.datasets.len()
        ),
    }

    println!("{}", render_json(&render, pretty)?);
    Ok(())
}
