use crate::utils::truncate_chars;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure of a single GET request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not complete within its timeout
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS, redirect or body decoding failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP status {status}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

// Seam for the HTTP collaborator. Every network call in the pipeline goes
// through it, one at a time.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// GET `url` and return the response body as text
    async fn get(&self, url: &Url, timeout: Duration) -> Result<String, FetchError>;

    /// GET `url` and keep at most `max_chars` characters of the body.
    ///
    /// Implementations may stop reading once the limit is reached.
    async fn get_limited(
        &self,
        url: &Url,
        timeout: Duration,
        max_chars: usize,
    ) -> Result<String, FetchError> {
        let body = self.get(url, timeout).await?;
        Ok(truncate_chars(&body, max_chars))
    }
}
