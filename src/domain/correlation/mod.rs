//! Correlation heatmap aggregate.

pub mod entities;

pub use entities::*;
