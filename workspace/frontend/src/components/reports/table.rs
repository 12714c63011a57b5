use std::rc::Rc;

use common::{ReportRow, ReportType, TooltipFormatter};
use compute::adapter::series_specs;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report_type: ReportType,
    pub report_data: Rc<Vec<ReportRow>>,
}

/// Raw report rows with one column per charted series.
#[function_component(ReportTable)]
pub fn report_table(props: &Props) -> Html {
    let specs = series_specs(props.report_type);
    let formatter = TooltipFormatter::new(props.report_type, false);

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h3 class="card-title text-lg">{format!("{} Report", props.report_type.label())}</h3>
                <div class="overflow-x-auto">
                    <table class="table table-zebra table-sm">
                        <thead>
                            <tr>
                                <th>{"Period"}</th>
                                <th>{"Category"}</th>
                                {for specs.iter().map(|spec| html! { <th class="text-right">{spec.label}</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            {for props.report_data.iter().map(|row| html! {
                                <tr>
                                    <td>{&row.period}</td>
                                    <td>{row.category.clone().unwrap_or_default()}</td>
                                    {for specs.iter().map(|spec| html! {
                                        <td class="text-right">
                                            {formatter.format_value(spec.label, spec.field.value(row))}
                                        </td>
                                    })}
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
