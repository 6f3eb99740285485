//! Browser-side adapters: HTTP transport, console logging, DOM helpers.

pub mod browser;
pub mod http;
pub mod services;

pub use http::DashboardHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
