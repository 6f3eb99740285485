use crate::domain::market_data::TimeWindow;
use derive_more::Display;
use std::time::Duration;

/// Which dashboard view a piece of state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ViewKind {
    #[display(fmt = "stock")]
    Stock,
    #[display(fmt = "heatmap")]
    Heatmap,
}

impl ViewKind {
    /// API path serving this view's payload.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ViewKind::Stock => "/stock-data",
            ViewKind::Heatmap => "/heatmap-data",
        }
    }
}

/// Per-view selected window, latest payload and loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub time_window: TimeWindow,
    pub data: Option<T>,
    pub loading: bool,
}

impl<T> ViewState<T> {
    pub fn new(time_window: TimeWindow) -> Self {
        Self { time_window, data: None, loading: false }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new(TimeWindow::default())
    }
}

/// Periodic refresh while a view is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub interval: Duration,
    /// Skip ticks while the document is hidden.
    pub pause_when_hidden: bool,
}

impl RefreshPolicy {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

    pub fn every(interval: Duration) -> Self {
        Self { interval, pause_when_hidden: true }
    }

    pub fn always_poll(mut self) -> Self {
        self.pause_when_hidden = false;
        self
    }

}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::every(Self::DEFAULT_INTERVAL)
    }
}

/// What to do with a response that settles after the view moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResultPolicy {
    /// Apply only results issued for the current window; later ones are dropped.
    #[default]
    CurrentWindowOnly,
    /// Whatever settles last is shown, regardless of which window it was issued for.
    LastSettledWins,
}
