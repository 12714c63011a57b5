use common::{
    ChartType, DATE_FORMAT, GroupBy, ReportConfig, ReportConfigOverrides, ReportType,
    SelectOption, chart_type_options, group_by_options, parse_date, report_type_options,
};
use compute::{ConfigField, ConfigResolver, DateBound, DateRangePreset, date_range_options};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_generate_report: Callback<ReportConfig>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub initial_config: ReportConfigOverrides,
}

fn select_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<HtmlSelectElement>().map(|target| target.value())
}

/// Applies a preset relative to the date at the moment of selection, not the
/// date the builder was mounted on.
fn select_preset(config: &ReportConfig, key: &str) -> ReportConfig {
    ConfigResolver::default().apply_preset_key(config, key)
}

fn render_options(options: Vec<SelectOption>, selected: &str) -> Html {
    options
        .into_iter()
        .map(|option| {
            html! {
                <option value={option.key} selected={option.key == selected}>{option.text}</option>
            }
        })
        .collect()
}

#[function_component(ReportBuilder)]
pub fn report_builder(props: &Props) -> Html {
    let resolver = *use_state(ConfigResolver::default);
    let config = {
        let initial_config = props.initial_config.clone();
        use_state(move || resolver.initial_config(&initial_config))
    };
    let preset_key = use_state(|| DateRangePreset::INITIAL.key().to_string());

    let on_field_change = {
        let config = config.clone();
        move |field: ConfigField| {
            config.set(resolver.set_field(&config, field));
        }
    };

    let on_report_type_change = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            match select_value(&e).map(|value| value.parse::<ReportType>()) {
                Some(Ok(report_type)) => on_field_change(ConfigField::ReportType(report_type)),
                Some(Err(err)) => log::warn!("Ignoring report type selection: {}", err),
                None => {}
            }
        })
    };

    let on_group_by_change = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            match select_value(&e).map(|value| value.parse::<GroupBy>()) {
                Some(Ok(group_by)) => on_field_change(ConfigField::GroupBy(group_by)),
                Some(Err(err)) => log::warn!("Ignoring group by selection: {}", err),
                None => {}
            }
        })
    };

    let on_chart_type_change = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            match select_value(&e).map(|value| value.parse::<ChartType>()) {
                Some(Ok(chart_type)) => on_field_change(ConfigField::ChartType(chart_type)),
                Some(Err(err)) => log::warn!("Ignoring chart type selection: {}", err),
                None => {}
            }
        })
    };

    let on_show_chart_change = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<HtmlInputElement>() {
                on_field_change(ConfigField::ShowChart(target.checked()));
            }
        })
    };

    let on_preset_change = {
        let config = config.clone();
        let preset_key = preset_key.clone();
        Callback::from(move |e: Event| {
            if let Some(key) = select_value(&e) {
                log::debug!("Date range preset selected: {}", key);
                config.set(select_preset(&config, &key));
                preset_key.set(key);
            }
        })
    };

    let on_date_change = |bound: DateBound| {
        let config = config.clone();
        Callback::from(move |e: Event| {
            let Some(target) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            match parse_date(&target.value()) {
                Ok(date) => config.set(resolver.set_date_range_field(&config, bound, date)),
                Err(err) => log::warn!("Ignoring {:?} date: {}", bound, err),
            }
        })
    };
    let on_start_date_change = on_date_change(DateBound::Start);
    let on_end_date_change = on_date_change(DateBound::End);

    let on_generate_click = {
        let config = config.clone();
        let on_generate_report = props.on_generate_report.clone();
        let is_loading = props.is_loading;
        Callback::from(move |_: MouseEvent| {
            let submitted = ConfigResolver::default().submit(&config, is_loading, |snapshot| {
                on_generate_report.emit(snapshot)
            });
            if !submitted {
                log::debug!("Report generation already in progress");
            }
        })
    };

    let date_range = config.date_range;

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h2 class="card-title">{"Report Configuration"}</h2>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Report Type"}</span></label>
                        <select class="select select-bordered w-full" onchange={on_report_type_change}>
                            {render_options(report_type_options(), config.report_type.as_str())}
                        </select>
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Group By"}</span></label>
                        <select class="select select-bordered w-full" onchange={on_group_by_change}>
                            {render_options(group_by_options(), config.group_by.as_str())}
                        </select>
                    </div>
                </div>

                <div class="form-control w-full mt-2">
                    <label class="label"><span class="label-text">{"Date Range"}</span></label>
                    <select class="select select-bordered w-full" onchange={on_preset_change}>
                        {render_options(date_range_options(), &preset_key)}
                    </select>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-2">
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Start Date"}</span></label>
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            value={date_range.start_date.format(DATE_FORMAT).to_string()}
                            onchange={on_start_date_change}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"End Date"}</span></label>
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            value={date_range.end_date.format(DATE_FORMAT).to_string()}
                            onchange={on_end_date_change}
                        />
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-2">
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-4">
                            <span class="label-text">{"Show Chart"}</span>
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                checked={config.show_chart}
                                onchange={on_show_chart_change}
                            />
                        </label>
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"Chart Type"}</span></label>
                        <select
                            class="select select-bordered w-full"
                            onchange={on_chart_type_change}
                            disabled={!config.show_chart}
                        >
                            {render_options(chart_type_options(), config.chart_type.as_str())}
                        </select>
                    </div>
                </div>

                <div class="divider"></div>

                <div class="card-actions justify-end">
                    <button class="btn btn-primary" onclick={on_generate_click} disabled={props.is_loading}>
                        {if props.is_loading {
                            html! { <span class="loading loading-spinner loading-sm"></span> }
                        } else {
                            html! {}
                        }}
                        {"Generate Report"}
                    </button>
                </div>
            </div>
        </div>
    }
}
