use crate::config::AnalyzerConfig;
use crate::fetchers::fetcher::{Fetch, FetchError};
use crate::utils::{round_to, timeout_secs};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

/// Endpoint of the page-speed scoring service
pub const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

/// JSON pointer to the performance category score (0.0 - 1.0)
const PERFORMANCE_SCORE_POINTER: &str = "/lighthouseResult/categories/performance/score";

/// How the page's speed was measured, if at all
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PerformanceReading {
    /// Performance score from the page-speed service, 0 - 100
    PageSpeed { score: f64 },
    /// Wall-clock duration of a single GET, in seconds
    ResponseTime {
        seconds: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pagespeed_error: Option<String>,
    },
    /// Neither the service nor the probe produced a value
    Unavailable { reason: String },
    /// Measurement was disabled
    Skipped,
}

/// Why the page-speed service did not yield a score
#[derive(Debug, Error)]
pub enum PageSpeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("service error: {0}")]
    Api(String),

    #[error("response has no performance score")]
    MissingScore,

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the service request URL for `target`
pub fn pagespeed_request_url(target: &Url, api_key: Option<&str>) -> Result<Url, url::ParseError> {
    let mut params = vec![("url", target.as_str()), ("category", "performance")];
    if let Some(key) = api_key {
        params.push(("key", key));
    }
    Url::parse_with_params(PAGESPEED_ENDPOINT, &params)
}

/// Extract the performance score from a service response, scaled to 0 - 100
pub fn parse_performance_score(body: &str) -> Result<f64, PageSpeedError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = api_error_message(&value) {
        return Err(PageSpeedError::Api(message));
    }

    value
        .pointer(PERFORMANCE_SCORE_POINTER)
        .and_then(Value::as_f64)
        .filter(|score| (0.0..=1.0).contains(score))
        .map(|score| round_to(score * 100.0, 2))
        .ok_or(PageSpeedError::MissingScore)
}

/// Message of a `{"error": {...}}` payload, if present
fn api_error_message(value: &Value) -> Option<String> {
    let error = value.get("error")?;
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string());
    Some(message)
}

/// Query the page-speed service for `target`
pub async fn query_pagespeed<F: Fetch>(
    fetcher: &F,
    target: &Url,
    api_key: Option<&str>,
    timeout: Duration,
) -> Result<f64, PageSpeedError> {
    let request = pagespeed_request_url(target, api_key)
        .map_err(|e| PageSpeedError::Api(e.to_string()))?;

    match fetcher.get(&request, timeout).await {
        Ok(body) => parse_performance_score(&body),
        // Error responses carry a JSON payload worth showing to the user
        Err(FetchError::Status { status, body }) => {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| api_error_message(&value))
                .unwrap_or_else(|| format!("HTTP status {}", status));
            Err(PageSpeedError::Api(message))
        }
        Err(err) => Err(err.into()),
    }
}

/// Time a single GET of `target`, in seconds rounded to 2 decimals
pub async fn measure_response_time<F: Fetch>(
    fetcher: &F,
    target: &Url,
    timeout: Duration,
) -> Result<f64, FetchError> {
    let start = Instant::now();
    fetcher.get(target, timeout).await?;
    Ok(round_to(start.elapsed().as_secs_f64(), 2))
}

/// Measure page speed: the service first, then the local probe
pub async fn measure_performance<F: Fetch>(
    fetcher: &F,
    target: &Url,
    config: &AnalyzerConfig,
) -> PerformanceReading {
    if !config.pagespeed_enabled {
        return PerformanceReading::Skipped;
    }

    let timeout = timeout_secs(config.pagespeed_timeout_secs);
    ::log::info!("Querying page-speed service for {}", target);

    let pagespeed_error =
        match query_pagespeed(fetcher, target, config.pagespeed_api_key.as_deref(), timeout).await
        {
            Ok(score) => return PerformanceReading::PageSpeed { score },
            Err(err) => {
                ::log::warn!("Page-speed score unavailable: {}", err);
                err.to_string()
            }
        };

    ::log::info!("Falling back to a response time probe");
    match measure_response_time(fetcher, target, timeout).await {
        Ok(seconds) => PerformanceReading::ResponseTime {
            seconds,
            pagespeed_error: Some(pagespeed_error),
        },
        Err(err) => {
            ::log::warn!("Response time probe failed: {}", err);
            PerformanceReading::Unavailable {
                reason: format!("{}; probe: {}", pagespeed_error, err),
            }
        }
    }
}
