//! Bridge from resolved chart payloads to plotly.js.

use common::{ChartOptions, ChartType, Dataset, LegendPosition};
use compute::ChartPayload;
use plotly::common::{Orientation, Title};
use plotly::layout::{Axis, Legend, RangeMode};
use plotly::Layout;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

pub const CHART_HEIGHT: usize = 400;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn hover_texts(payload: &ChartPayload, dataset: &Dataset) -> Vec<String> {
    let tooltip = payload.options.tooltip;
    match payload.chart_type {
        ChartType::Pie => payload
            .data
            .labels
            .iter()
            .zip(&dataset.data)
            .map(|(label, value)| tooltip.format(label, *value))
            .collect(),
        ChartType::Line | ChartType::Bar => dataset
            .data
            .iter()
            .map(|value| tooltip.format(&dataset.label, *value))
            .collect(),
    }
}

fn trace(payload: &ChartPayload, dataset: &Dataset) -> Value {
    let labels = &payload.data.labels;
    let text = hover_texts(payload, dataset);
    let color = dataset.border_color.clone().or_else(|| dataset.background_color.first().cloned());

    match payload.chart_type {
        ChartType::Line => json!({
            "type": "scatter",
            "mode": "lines+markers",
            "name": dataset.label,
            "x": labels,
            "y": dataset.data,
            "fill": if dataset.fill { "tozeroy" } else { "none" },
            "line": {
                "color": color,
                "shape": if dataset.tension > 0.0 { "spline" } else { "linear" },
                "smoothing": dataset.tension,
            },
            "text": text,
            "hoverinfo": "text",
        }),
        ChartType::Bar => json!({
            "type": "bar",
            "name": dataset.label,
            "x": labels,
            "y": dataset.data,
            "marker": { "color": color },
            "text": text,
            "hoverinfo": "text",
            "textposition": "none",
        }),
        ChartType::Pie => json!({
            "type": "pie",
            "name": dataset.label,
            "labels": labels,
            "values": dataset.data,
            "marker": { "colors": dataset.background_color },
            "text": text,
            "hoverinfo": "text",
            "textinfo": "percent",
        }),
    }
}

/// One plotly trace per dataset, hover text formatted like the tooltips.
pub fn plot_traces(payload: &ChartPayload) -> Vec<Value> {
    payload
        .data
        .datasets
        .iter()
        .map(|dataset| trace(payload, dataset))
        .collect()
}

fn legend(position: LegendPosition) -> Legend {
    match position {
        LegendPosition::Top => Legend::new().orientation(Orientation::Horizontal).y(1.1),
    }
}

/// Plotly layout carrying the legend placement and, for cartesian charts, the axis titles.
pub fn plot_layout(options: &ChartOptions) -> Layout {
    let mut layout = Layout::new()
        .legend(legend(options.legend_position))
        .auto_size(options.responsive)
        .height(CHART_HEIGHT);

    if let Some(scales) = &options.scales {
        let mut y_axis = Axis::new().title(Title::with_text(&scales.y.title));
        if scales.y.begin_at_zero {
            y_axis = y_axis.range_mode(RangeMode::ToZero);
        }
        layout = layout
            .x_axis(Axis::new().title(Title::with_text(&scales.x.title)))
            .y_axis(y_axis);
    }
    layout
}

fn parse_js(json: &str) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(json)
}

/// Draws the payload into the element with id `div_id`.
pub fn draw(div_id: &str, payload: &ChartPayload) -> Result<(), JsValue> {
    let to_js_error = |err: serde_json::Error| JsValue::from_str(&err.to_string());

    let traces = serde_json::to_string(&plot_traces(payload)).map_err(to_js_error)?;
    let layout = serde_json::to_string(&plot_layout(&payload.options)).map_err(to_js_error)?;
    let config = json!({ "responsive": payload.options.responsive, "displaylogo": false }).to_string();

    newPlot(div_id, parse_js(&traces)?, parse_js(&layout)?, parse_js(&config)?);
    Ok(())
}
