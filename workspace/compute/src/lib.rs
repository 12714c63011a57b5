pub mod adapter;
pub mod cache;
pub mod grouping;
pub mod options;
pub mod preset;
pub mod render;
pub mod resolver;

#[cfg(test)]
pub mod testing;

pub use adapter::{build_pie_data, build_series_data};
pub use cache::ChartCache;
pub use options::{chart_title, resolve_options, y_axis_title};
pub use preset::{DateRangePreset, date_range_options};
pub use render::{ChartPayload, ChartRender, resolve_render};
pub use resolver::{ConfigField, ConfigResolver, DateBound};

use chrono::{Local, NaiveDate};

/// Returns the resolver used by the builder and the CLI.
///
/// This function uses the provided date as "today" or the current local date if none is provided.
pub fn default_resolver(today: Option<NaiveDate>) -> ConfigResolver {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    ConfigResolver::new_with_today(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ReportConfigOverrides;

    /// A pinned date makes every preset reproducible.
    #[test]
    fn test_default_resolver_with_pinned_today() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let resolver = default_resolver(Some(today));
        let config = resolver.initial_config(&ReportConfigOverrides::default());

        let config = resolver.apply_preset(&config, DateRangePreset::LastQuarter);
        assert_eq!(config.date_range.start_date, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(config.date_range.end_date, today);
    }

    /// The resolver output flows into the chart state machine unchanged.
    #[test]
    fn test_config_drives_chart_resolution() {
        let resolver = default_resolver(Some(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()));
        let config = resolver.set_field(
            &resolver.initial_config(&ReportConfigOverrides::default()),
            ConfigField::ChartType(common::ChartType::Bar),
        );

        let render = resolve_render(config.report_type, config.chart_type.as_str(), &testing::sales_rows());
        assert_eq!(render.title(), Some("Sales Bar Chart"));
    }
}
