use std::rc::Rc;

use common::{ReportRow, ReportType};
use compute::{ChartCache, ChartPayload, ChartRender};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::plot;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report_type: ReportType,
    /// Chart kind key, kinds other than line, bar and pie get a placeholder
    pub chart_type: AttrValue,
    pub report_data: Rc<Vec<ReportRow>>,
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    title: AttrValue,
    message: AttrValue,
}

#[function_component(ChartPlaceholder)]
fn chart_placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{&props.title}</h3>
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-bar text-4xl mb-4 opacity-50"></i>
                    <p>{&props.message}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(ReportChart)]
pub fn report_chart(props: &Props) -> Html {
    let cache = use_state(ChartCache::default);
    let render = cache.resolve(props.report_type, &props.chart_type, &props.report_data);

    match render {
        ChartRender::NoData => html! {},
        ChartRender::Empty { title } => html! {
            <ChartPlaceholder title={title} message="No data available for chart" />
        },
        ChartRender::Unsupported { title, chart_type } => {
            log::warn!("Cannot draw chart kind '{}'", chart_type);
            html! { <ChartPlaceholder title={title} message="Unsupported chart type" /> }
        }
        ChartRender::Rendered(payload) => html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{&payload.title}</h3>
                    <PlotlyChart payload={Rc::new(payload)} />
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    payload: Rc<ChartPayload>,
}

#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();
    let div_id = format!(
        "report-chart-{}-{}",
        props.payload.report_type, props.payload.chart_type
    );

    use_effect_with(
        (container_ref.clone(), props.payload.clone(), div_id.clone()),
        move |(container_ref, payload, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);
                if let Err(err) = plot::draw(div_id, payload) {
                    log::error!("Failed to draw {}: {:?}", payload.title, err);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style={format!("width:100%; height:{}px;", plot::CHART_HEIGHT)}></div>
    }
}
