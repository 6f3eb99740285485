use crate::domain::market_data::StockSample;

/// Domain service for derived values over a price series
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesAnalysisService;

impl SeriesAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Arithmetic mean of all prices. Absent or empty series average to 0.
    pub fn average_price(&self, samples: Option<&[StockSample]>) -> f64 {
        let Some(samples) = samples else {
            return 0.0;
        };
        if samples.is_empty() {
            return 0.0;
        }
        let total: f64 = samples.iter().map(|s| s.price.value()).sum();
        total / samples.len() as f64
    }

    /// Lowest and highest price, `None` for an empty series.
    pub fn price_bounds(&self, samples: &[StockSample]) -> Option<(f64, f64)> {
        samples.iter().map(|s| s.price.value()).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }
}
