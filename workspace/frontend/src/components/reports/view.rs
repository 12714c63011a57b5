use std::rc::Rc;

use common::{ReportConfig, ReportRow};
use yew::prelude::*;

use super::builder::ReportBuilder;
use super::chart::ReportChart;
use super::table::ReportTable;
use crate::components::status::{ErrorDisplay, Loading};
use crate::hooks::FetchState;
use crate::mock_data::load_report_rows;
use crate::settings::get_settings;

#[function_component(Reports)]
pub fn reports() -> Html {
    let initial_config = use_memo((), |_| get_settings().report_overrides());
    let submitted = use_state(|| None::<ReportConfig>);
    let fetch_state = use_state(FetchState::<Rc<Vec<ReportRow>>>::default);

    let on_generate_report = {
        let submitted = submitted.clone();
        let fetch_state = fetch_state.clone();
        Callback::from(move |config: ReportConfig| {
            log::info!(
                "Generating {} report for {} .. {}",
                config.report_type,
                config.date_range.start_date,
                config.date_range.end_date
            );
            submitted.set(Some(config.clone()));
            fetch_state.set(FetchState::Loading);

            let fetch_state = fetch_state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_report_rows(config).await {
                    Ok(rows) => fetch_state.set(FetchState::Success(Rc::new(rows))),
                    Err(err) => {
                        log::error!("Failed to load report rows: {}", err);
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    let on_retry = {
        let submitted = submitted.clone();
        let on_generate_report = on_generate_report.clone();
        Callback::from(move |_: ()| {
            if let Some(config) = (*submitted).clone() {
                on_generate_report.emit(config);
            }
        })
    };

    let results = match (&*fetch_state, &*submitted) {
        (FetchState::Loading, _) => html! { <Loading text={"Generating report..."} /> },
        (FetchState::Error(err), _) => html! { <ErrorDisplay message={err.clone()} on_retry={Some(on_retry)} /> },
        (FetchState::Success(rows), Some(config)) => html! {
            <>
                {if config.show_chart {
                    html! {
                        <ReportChart
                            report_type={config.report_type}
                            chart_type={config.chart_type.as_str()}
                            report_data={rows.clone()}
                        />
                    }
                } else {
                    html! {}
                }}
                {if rows.is_empty() {
                    html! { <p class="text-center py-8 text-gray-500">{"The report has no rows for this period."}</p> }
                } else {
                    html! { <ReportTable report_type={config.report_type} report_data={rows.clone()} /> }
                }}
            </>
        },
        _ => html! {
            <p class="text-center py-8 text-gray-500">{"Configure a report and press Generate Report."}</p>
        },
    };

    html! {
        <>
            <ReportBuilder
                on_generate_report={on_generate_report}
                is_loading={fetch_state.is_loading()}
                initial_config={(*initial_config).clone()}
            />
            {results}
        </>
    }
}
