use crate::fetchers::FetchError;
use thiserror::Error;

/// Failures that abort an analysis
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("URL {0:?} has no host")]
    MissingHost(String),

    #[error("failed to fetch website: {0}")]
    PageFetch(#[from] FetchError),
}
