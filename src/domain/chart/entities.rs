use super::value_objects::{AxisTick, Viewport};
use crate::domain::market_data::{StockSample, services::SeriesAnalysisService};
use crate::time_utils::format_sample_time;

const Y_TICKS: usize = 5;
const MAX_X_TICKS: usize = 6;

/// Screen geometry of the stock line chart: the price line plus the flat average overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub viewport: Viewport,
    pub price_points: Vec<(f64, f64)>,
    /// Hover text per point, `HH:MM:SS: price`
    pub point_labels: Vec<String>,
    pub average: f64,
    pub average_y: f64,
    pub y_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<AxisTick>,
}

impl LineChart {
    /// Lay out `samples` in server order. `None` when there is nothing to draw.
    pub fn build(samples: &[StockSample], average: f64, width: f64, height: f64) -> Option<Self> {
        let (lo, hi) = SeriesAnalysisService::new().price_bounds(samples)?;
        let (min_price, max_price) = padded_range(lo.min(average), hi.max(average));
        let viewport = Viewport::new(width, height).with_price_range(min_price, max_price);

        let count = samples.len();
        let price_points = samples
            .iter()
            .enumerate()
            .map(|(i, s)| (viewport.index_to_x(i, count), viewport.price_to_y(s.price.value())))
            .collect();
        let point_labels = samples
            .iter()
            .map(|s| format!("{}: {:.2}", format_sample_time(&s.timestamp), s.price.value()))
            .collect();

        let y_ticks = (0..Y_TICKS)
            .map(|i| {
                let price = min_price + (max_price - min_price) * i as f64 / (Y_TICKS - 1) as f64;
                AxisTick { position: viewport.price_to_y(price), label: format!("{:.2}", price) }
            })
            .collect();

        let stride = count.div_ceil(MAX_X_TICKS).max(1);
        let x_ticks = samples
            .iter()
            .enumerate()
            .step_by(stride)
            .map(|(i, s)| AxisTick {
                position: viewport.index_to_x(i, count),
                label: format_sample_time(&s.timestamp),
            })
            .collect();

        Some(Self {
            average_y: viewport.price_to_y(average),
            viewport,
            price_points,
            point_labels,
            average,
            y_ticks,
            x_ticks,
        })
    }

    /// `points` attribute for an SVG polyline
    pub fn price_polyline(&self) -> String {
        self.price_points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Horizontal grid rows, one per y tick, spanning the plot
    pub fn grid_rows(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        let left = self.viewport.left_gutter;
        let right = self.viewport.width;
        self.y_ticks.iter().map(move |tick| ((left, tick.position), (right, tick.position)))
    }

    /// Endpoints of the horizontal average line across the plot
    pub fn average_segment(&self) -> ((f64, f64), (f64, f64)) {
        let left = self.viewport.left_gutter;
        let right = self.viewport.width;
        ((left, self.average_y), (right, self.average_y))
    }
}

/// Add 5% headroom; a flat series gets ±1 so it doesn't collapse onto one pixel row.
fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = span * 0.05;
    (lo - pad, hi + pad)
}
