use common::{ChartType, GroupBy, ReportConfigOverrides, ReportType};
use log::Level;
use web_sys::window;

const LOG_LEVEL_KEY: &str = "crm_reports_log_level";
const REPORT_TYPE_KEY: &str = "crm_reports_default_report_type";
const CHART_TYPE_KEY: &str = "crm_reports_default_chart_type";
const GROUP_BY_KEY: &str = "crm_reports_default_group_by";
const SHOW_CHART_KEY: &str = "crm_reports_show_chart";

const STORAGE_KEYS: [&str; 5] = [
    LOG_LEVEL_KEY,
    REPORT_TYPE_KEY,
    CHART_TYPE_KEY,
    GROUP_BY_KEY,
    SHOW_CHART_KEY,
];

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Report type the builder starts on
    pub default_report_type: Option<ReportType>,

    /// Chart kind the builder starts on
    pub default_chart_type: Option<ChartType>,

    /// Grouping the builder starts on
    pub default_group_by: Option<GroupBy>,

    /// Whether the chart toggle starts switched on
    pub show_chart: Option<bool>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            default_report_type: None,
            default_chart_type: None,
            default_group_by: None,
            show_chart: None,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                for key in STORAGE_KEYS {
                    if let Ok(Some(value)) = storage.get_item(key) {
                        settings.apply_stored(key, &value);
                    }
                }
            }
        }

        settings
    }

    /// Applies one stored value, ignoring keys and values it does not understand.
    pub fn apply_stored(&mut self, key: &str, value: &str) {
        match key {
            LOG_LEVEL_KEY => {
                self.log_level = match value.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => self.log_level,
                };
            }
            REPORT_TYPE_KEY => {
                if let Ok(report_type) = value.parse() {
                    self.default_report_type = Some(report_type);
                }
            }
            CHART_TYPE_KEY => {
                if let Ok(chart_type) = value.parse() {
                    self.default_chart_type = Some(chart_type);
                }
            }
            GROUP_BY_KEY => {
                if let Ok(group_by) = value.parse() {
                    self.default_group_by = Some(group_by);
                }
            }
            SHOW_CHART_KEY => {
                self.show_chart = Some(value.to_lowercase() == "true");
            }
            _ => {}
        }
    }

    /// Initial values handed to the report builder
    pub fn report_overrides(&self) -> ReportConfigOverrides {
        ReportConfigOverrides {
            report_type: self.default_report_type,
            group_by: self.default_group_by,
            show_chart: self.show_chart,
            chart_type: self.default_chart_type,
            ..Default::default()
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_values_are_parsed() {
        let mut settings = AppSettings::default();
        settings.apply_stored(LOG_LEVEL_KEY, "TRACE");
        settings.apply_stored(REPORT_TYPE_KEY, "leads");
        settings.apply_stored(CHART_TYPE_KEY, "pie");
        settings.apply_stored(GROUP_BY_KEY, "week");
        settings.apply_stored(SHOW_CHART_KEY, "false");

        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.default_report_type, Some(ReportType::Leads));
        assert_eq!(settings.default_chart_type, Some(ChartType::Pie));
        assert_eq!(settings.default_group_by, Some(GroupBy::Week));
        assert_eq!(settings.show_chart, Some(false));
    }

    #[test]
    fn test_unknown_values_keep_defaults() {
        let mut settings = AppSettings::default();
        settings.apply_stored(LOG_LEVEL_KEY, "loud");
        settings.apply_stored(REPORT_TYPE_KEY, "invoices");
        settings.apply_stored("crm_reports_theme", "dark");

        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_report_overrides_carry_defaults() {
        let settings = AppSettings {
            default_report_type: Some(ReportType::Contacts),
            show_chart: Some(false),
            ..Default::default()
        };

        let overrides = settings.report_overrides();
        assert_eq!(overrides.report_type, Some(ReportType::Contacts));
        assert_eq!(overrides.show_chart, Some(false));
        assert_eq!(overrides.date_range, None);
        assert!(AppSettings::default().report_overrides().is_empty());
    }
}
