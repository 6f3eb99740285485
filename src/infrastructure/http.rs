use crate::config::DashboardConfig;
use crate::domain::{
    correlation::HeatmapPayload,
    errors::{FetchError, FetchResult},
    logging::LogComponent,
    market_data::{StockSample, StockSeries, TimeWindow},
    repositories::DashboardRepository,
    view_state::ViewKind,
};
use crate::{log_debug, log_warn};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// HTTP client for the dashboard API (gloo-net / fetch)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardHttpClient {
    base_url: String,
}

impl DashboardHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base_url.as_str())
    }

    /// `<base>/<endpoint>?minutes=<window>`
    pub fn endpoint_url(&self, kind: ViewKind, window: TimeWindow) -> String {
        format!("{}{}?minutes={}", self.base_url, kind.endpoint(), window.minutes())
    }

    /// GET `url` and decode the JSON body. Transport errors, non-2xx statuses and
    /// undecodable bodies all come back as [`FetchError`].
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET {}", url);

        let response = Request::get(url).send().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !response.ok() {
            log_warn!(
                LogComponent::Infrastructure("HTTP"),
                "HTTP {} {} from {}",
                response.status(),
                response.status_text(),
                url
            );
            return Err(FetchError::Status { url: url.to_string(), status: response.status() });
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: format!("failed to read body: {e}"),
        })?;

        log_debug!(LogComponent::Infrastructure("HTTP"), "✅ {} bytes from {}", body.len(), url);
        decode_payload(url, &body)
    }
}

/// Parse a response body, mapping failures to [`FetchError::Decode`].
pub fn decode_payload<T: DeserializeOwned>(url: &str, body: &str) -> FetchResult<T> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

impl DashboardRepository for DashboardHttpClient {
    async fn stock_series(&self, window: TimeWindow) -> FetchResult<StockSeries> {
        let url = self.endpoint_url(ViewKind::Stock, window);
        let samples: Vec<StockSample> = self.get_json(&url).await?;
        Ok(StockSeries::from(samples))
    }

    async fn heatmap(&self, window: TimeWindow) -> FetchResult<HeatmapPayload> {
        let url = self.endpoint_url(ViewKind::Heatmap, window);
        self.get_json(&url).await
    }
}
