use crate::domain::{
    logging::LogLevel,
    market_data::TimeWindow,
    view_state::{RefreshPolicy, StaleResultPolicy},
};
use once_cell::sync::OnceCell;

/// Compiled-in API location
pub const DEFAULT_API_BASE_URL: &str = "http://your-api-server.com";

/// Startup configuration. Read-only once installed.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub default_window: TimeWindow,
    pub stock_refresh: Option<RefreshPolicy>,
    pub heatmap_refresh: Option<RefreshPolicy>,
    pub stale_results: StaleResultPolicy,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_window: TimeWindow::default(),
            stock_refresh: Some(RefreshPolicy::default()),
            heatmap_refresh: None,
            stale_results: StaleResultPolicy::default(),
            log_level: LogLevel::build_default(),
        }
    }
}

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

/// Install the process-wide configuration. Returns `false` if one was already set.
pub fn init_config(config: DashboardConfig) -> bool {
    CONFIG.set(config).is_ok()
}

pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_contract() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.default_window, TimeWindow::FifteenMinutes);
        assert_eq!(config.stock_refresh.map(|p| p.interval), Some(RefreshPolicy::DEFAULT_INTERVAL));
        assert!(config.heatmap_refresh.is_none());
        assert_eq!(config.stale_results, StaleResultPolicy::CurrentWindowOnly);
    }

    #[test]
    fn config_is_installed_once() {
        let first = config().clone();
        assert!(!init_config(DashboardConfig { log_level: LogLevel::Error, ..DashboardConfig::default() }));
        assert_eq!(config(), &first);
    }
}
