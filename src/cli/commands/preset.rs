use anyhow::Result;
use chrono::NaiveDate;
use common::ReportConfig;
use compute::{DateRangePreset, default_resolver};
use tracing::{info, warn};

use crate::config::AppConfig;

/// Applies a preset key to the configured default report configuration.
pub fn preset_config(config: &AppConfig, key: &str, today: Option<NaiveDate>) -> ReportConfig {
    let resolver = default_resolver(today.or(config.today));
    let initial = resolver.initial_config(&config.defaults);

    if key.parse::<DateRangePreset>().is_err() {
        warn!("Unknown date range preset '{}', keeping the default range", key);
    }
    resolver.apply_preset_key(&initial, key)
}

pub fn resolve_preset(config: &AppConfig, key: &str, today: Option<NaiveDate>) -> Result<()> {
    let report_config = preset_config(config, key, today);
    info!(
        "Preset '{}' resolved to {} .. {}",
        key, report_config.date_range.start_date, report_config.date_range.end_date
    );

    println!("{}", serde_json::to_string_pretty(&report_config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{DateRange, ReportConfigOverrides, ReportType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_argument_today_wins_over_configured_today() {
        let config = AppConfig {
            today: Some(date(2020, 1, 1)),
            ..Default::default()
        };

        let report_config = preset_config(&config, "ytd", Some(date(2026, 10, 18)));
        assert_eq!(report_config.date_range, DateRange::new(date(2026, 1, 1), date(2026, 10, 18)));
    }

    #[test]
    fn test_configured_defaults_are_kept() {
        let config = AppConfig {
            today: Some(date(2026, 5, 20)),
            defaults: ReportConfigOverrides {
                report_type: Some(ReportType::Activities),
                ..Default::default()
            },
            ..Default::default()
        };

        let report_config = preset_config(&config, "lastYear", None);
        assert_eq!(report_config.report_type, ReportType::Activities);
        assert_eq!(report_config.date_range, DateRange::new(date(2025, 1, 1), date(2025, 12, 31)));
    }

    #[test]
    fn test_unknown_key_keeps_default_range() {
        let config = AppConfig {
            today: Some(date(2026, 10, 18)),
            ..Default::default()
        };

        let report_config = preset_config(&config, "nextDecade", None);
        assert_eq!(report_config.date_range, DateRange::new(date(2026, 9, 18), date(2026, 10, 18)));
    }
}
