use wasm_bindgen::prelude::*;

use crate::config::{DashboardConfig, config, init_config};
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Install the panic hook, configuration and browser logger. Call once before mounting.
#[wasm_bindgen]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let installed = init_config(DashboardConfig::default());
    let settings = config();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(settings.log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    if !installed {
        crate::log_warn!(LogComponent::Presentation("Initialize"), "configuration was already installed");
    }
    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Dashboard initialized, API at {}",
        settings.api_base_url
    );
}
