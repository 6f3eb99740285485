/// Stroke color of the price line
pub const PRICE_STROKE: &str = "#8884d8";
/// Stroke color of the average overlay
pub const AVERAGE_STROKE: &str = "#ff7300";

/// Value Object - drawing area and the price range mapped onto it
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Space reserved left of the plot for price labels
    pub left_gutter: f64,
    /// Space reserved below the plot for time labels
    pub bottom_gutter: f64,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            left_gutter: 60.0,
            bottom_gutter: 30.0,
            min_price: 0.0,
            max_price: 100.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn with_price_range(mut self, min_price: f64, max_price: f64) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left_gutter).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.bottom_gutter).max(0.0)
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// X of the `index`-th of `count` evenly spaced samples. A single sample sits mid-plot.
    pub fn index_to_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left_gutter + self.plot_width() / 2.0;
        }
        let step = self.plot_width() / (count - 1) as f64;
        self.left_gutter + step * index as f64
    }

    /// Y of `price`, inverted so higher prices sit higher on screen.
    pub fn price_to_y(&self, price: f64) -> f64 {
        if self.price_range() == 0.0 {
            return self.plot_height() / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        self.plot_height() * (1.0 - normalized)
    }
}

/// Value Object - labelled axis position
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}
