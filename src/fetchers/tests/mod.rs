mod artifact_tests;

use crate::fetchers::{Fetch, FetchError};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// In-memory fetcher keyed by URL.
///
/// Looks up the full URL first, then the URL without its query string.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    responses: HashMap<String, Result<String, FetchError>>,
}

impl StaticFetcher {
    pub(crate) fn with(mut self, url: &str, response: Result<&str, FetchError>) -> Self {
        self.responses
            .insert(url.to_string(), response.map(str::to_string));
        self
    }
}

impl Fetch for StaticFetcher {
    async fn get(&self, url: &Url, _timeout: Duration) -> Result<String, FetchError> {
        let without_query = format!("{}{}", url.origin().ascii_serialization(), url.path());
        self.responses
            .get(url.as_str())
            .or_else(|| self.responses.get(&without_query))
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Transport(format!("no fixture for {}", url))))
    }
}
