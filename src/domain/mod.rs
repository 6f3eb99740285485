pub mod chart;
pub mod correlation;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod navigation;
pub mod repositories;
pub mod view_state;
