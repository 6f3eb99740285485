use crate::domain::{
    correlation::HeatmapPayload,
    errors::FetchResult,
    market_data::{StockSeries, TimeWindow},
};

/// Source of dashboard payloads
#[allow(async_fn_in_trait)]
pub trait DashboardRepository {
    /// Price series for the last `window` minutes.
    async fn stock_series(&self, window: TimeWindow) -> FetchResult<StockSeries>;

    /// Correlation matrix over the last `window` minutes.
    async fn heatmap(&self, window: TimeWindow) -> FetchResult<HeatmapPayload>;
}
