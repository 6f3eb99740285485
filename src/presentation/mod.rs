//! Leptos components and the browser-side command executor.

pub mod heatmap_view;
pub mod stock_view;
pub mod time_window_select;
pub mod view_driver;

pub use heatmap_view::HeatmapView;
pub use stock_view::StockView;
pub use time_window_select::TimeWindowSelect;
pub use view_driver::{FetchFn, ViewDriver};
