use derive_more::Display;

/// Why a fetch did not produce a payload.
///
/// Every variant collapses into the same "fetch failed" outcome for the view:
/// it gets logged, the previous data stays on screen and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "request to {} failed: {}", url, reason)]
    Network { url: String, reason: String },
    #[display(fmt = "{} responded with HTTP {}", url, status)]
    Status { url: String, status: u16 },
    #[display(fmt = "malformed payload from {}: {}", url, reason)]
    Decode { url: String, reason: String },
}

impl std::error::Error for FetchError {}

pub type FetchResult<T> = Result<T, FetchError>;
