pub use super::value_objects::{Price, SampleTimestamp};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// Domain entity - one point of the price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSample {
    pub timestamp: SampleTimestamp,
    pub price: Price,
}

impl StockSample {
    pub fn new(timestamp: impl Into<SampleTimestamp>, price: f64) -> Self {
        Self { timestamp: timestamp.into(), price: Price::new(price) }
    }
}

/// One fetched price series, shared by reference.
///
/// Equality is identity: two series are equal only when they come from the same
/// fetch. Derived values keyed on a series therefore recompute exactly when a new
/// payload replaces the old one, even if the contents happen to match.
#[derive(Debug, Clone, Default)]
pub struct StockSeries(Arc<Vec<StockSample>>);

impl StockSeries {
    pub fn new(samples: Vec<StockSample>) -> Self {
        Self(Arc::new(samples))
    }

    pub fn samples(&self) -> &[StockSample] {
        &self.0
    }
}

impl From<Vec<StockSample>> for StockSeries {
    fn from(samples: Vec<StockSample>) -> Self {
        Self::new(samples)
    }
}

impl Deref for StockSeries {
    type Target = [StockSample];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for StockSeries {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
