use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// Value Object - price of one sample
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - sample timestamp exactly as the API returned it.
///
/// The API is free to send epoch milliseconds or a preformatted string; either way
/// the value is only compared and displayed, never re-sorted.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleTimestamp {
    Millis(f64),
    Text(String),
}

impl fmt::Display for SampleTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleTimestamp::Millis(ms) => write!(f, "{}", ms),
            SampleTimestamp::Text(text) => f.write_str(text),
        }
    }
}

impl From<u64> for SampleTimestamp {
    fn from(ms: u64) -> Self {
        SampleTimestamp::Millis(ms as f64)
    }
}

impl From<&str> for SampleTimestamp {
    fn from(text: &str) -> Self {
        SampleTimestamp::Text(text.to_string())
    }
}

/// Value Object - minutes of history requested from the API.
///
/// `Display`/`FromStr` use the bare minute count so the value can travel through
/// `<select>` options and query strings unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
    StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum TimeWindow {
    #[strum(serialize = "1")]
    OneMinute,
    #[strum(serialize = "5")]
    FiveMinutes,
    #[default]
    #[strum(serialize = "15")]
    FifteenMinutes,
    #[strum(serialize = "30")]
    ThirtyMinutes,
    #[strum(serialize = "60")]
    SixtyMinutes,
}

impl TimeWindow {
    pub fn minutes(&self) -> u32 {
        match self {
            Self::OneMinute => 1,
            Self::FiveMinutes => 5,
            Self::FifteenMinutes => 15,
            Self::ThirtyMinutes => 30,
            Self::SixtyMinutes => 60,
        }
    }

    /// Every selectable window, ascending.
    pub fn options() -> impl Iterator<Item = TimeWindow> {
        TimeWindow::iter()
    }

    /// "Last 1 minute", "Last 15 minutes", ...
    pub fn label(&self) -> String {
        let minutes = self.minutes();
        let plural = if minutes > 1 { "s" } else { "" };
        format!("Last {} minute{}", minutes, plural)
    }
}

impl TryFrom<u32> for TimeWindow {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        TimeWindow::iter()
            .find(|w| w.minutes() == minutes)
            .ok_or_else(|| format!("{} minutes is not a selectable time window", minutes))
    }
}
