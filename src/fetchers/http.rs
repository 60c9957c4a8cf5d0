use crate::fetchers::fetcher::{Fetch, FetchError};
use crate::utils::truncate_chars;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Characters of an error response body kept for diagnostics
pub(crate) const ERROR_BODY_CHARS: usize = 2000;

/// Upper bound of UTF-8 bytes per character
const MAX_CHAR_BYTES: usize = 4;

/// `Fetch` implementation backed by a reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher that sends `user_agent` with every request
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    async fn fetch(
        &self,
        url: &Url,
        timeout: Duration,
        max_chars: Option<usize>,
    ) -> Result<String, FetchError> {
        ::log::debug!("GET {} (timeout {:?})", url.origin().ascii_serialization(), timeout);

        let response = self.client.get(url.clone()).timeout(timeout).send().await?;
        let status = response.status();

        if !status.is_success() {
            ::log::debug!("Request answered with status {}", status);
            let body = read_body(response, Some(ERROR_BODY_CHARS)).await?;
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        read_body(response, max_chars).await
    }
}

/// Read the response body, stopping early once `max_chars` characters are buffered
async fn read_body(mut response: Response, max_chars: Option<usize>) -> Result<String, FetchError> {
    let Some(max_chars) = max_chars else {
        return Ok(response.text().await?);
    };

    let byte_limit = max_chars.saturating_mul(MAX_CHAR_BYTES);
    let mut bytes = Vec::new();
    while bytes.len() < byte_limit {
        match response.chunk().await? {
            Some(chunk) => bytes.extend_from_slice(&chunk),
            None => break,
        }
    }

    Ok(truncate_chars(&String::from_utf8_lossy(&bytes), max_chars))
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<String, FetchError> {
        self.fetch(url, timeout, None).await
    }

    async fn get_limited(
        &self,
        url: &Url,
        timeout: Duration,
        max_chars: usize,
    ) -> Result<String, FetchError> {
        self.fetch(url, timeout, Some(max_chars)).await
    }
}
