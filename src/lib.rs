// Re-export modules
pub mod config;
pub mod error;
pub mod extract;
pub mod fetchers;
pub mod report;
pub mod results;
pub mod scoring;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::AnalyzeError;
pub use results::Report;
pub use scoring::{AnalysisResult, CategoryScore, RankBucket};

use fetchers::{ArtifactKind, Fetch, HttpFetcher};
use url::Url;
use utils::timeout_secs;

/// Builder for a single-page SEO analysis
pub struct Analyzer {
    url: String,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer for `url`; `https://` is assumed when no scheme is given
    pub fn new(url: &str) -> Self {
        Self {
            url: utils::ensure_scheme(url),
            config: AnalyzerConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = AnalyzerConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the keyword used for the semantic score
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.config.keyword = keyword.to_string();
        self
    }

    /// Set the timeout for the page request
    pub fn with_page_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.page_timeout_secs = timeout_seconds;
        self
    }

    /// Skip page-speed measurement entirely
    pub fn without_pagespeed(mut self) -> Self {
        self.config.pagespeed_enabled = false;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the analysis over HTTP
    pub async fn run(&self) -> Result<Report, AnalyzeError> {
        let fetcher = HttpFetcher::new(&self.config.user_agent)?;
        self.run_with(&fetcher).await
    }

    /// Run the analysis with the given fetcher.
    ///
    /// Requests are issued one after another: page, robots.txt, sitemap.xml,
    /// then page speed. Only a failed page request is fatal.
    pub async fn run_with<F: Fetch>(&self, fetcher: &F) -> Result<Report, AnalyzeError> {
        // Override the API key with an environment variable if provided
        let config = self.config.clone().with_env_overrides();

        let target = Url::parse(&self.url).map_err(|source| AnalyzeError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        if !target.has_host() {
            return Err(AnalyzeError::MissingHost(self.url.clone()));
        }

        ::log::info!("Fetching {}", target);
        let html = fetcher
            .get(&target, timeout_secs(config.page_timeout_secs))
            .await?;
        ::log::debug!("Fetched {} bytes of HTML", html.len());

        let signals = extract::extract_signals(&html, config.top_words);

        let artifact_timeout = timeout_secs(config.artifact_timeout_secs);
        let robots = fetchers::fetch_site_artifact(
            fetcher,
            &target,
            ArtifactKind::Robots,
            artifact_timeout,
            config.artifact_max_chars,
        )
        .await;
        let sitemap = fetchers::fetch_site_artifact(
            fetcher,
            &target,
            ArtifactKind::Sitemap,
            artifact_timeout,
            config.artifact_max_chars,
        )
        .await;

        let performance = fetchers::measure_performance(fetcher, &target, &config).await;

        let analysis = scoring::score_page(&signals, &robots, &sitemap, &config.keyword);
        let roadmap = scoring::build_roadmap(&analysis);

        Ok(Report {
            url: target.to_string(),
            keyword: config.keyword,
            analysis,
            roadmap,
            signals,
            robots,
            sitemap,
            performance,
        })
    }
}
