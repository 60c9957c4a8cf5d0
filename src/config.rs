use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Environment variable that overrides the page-speed API key
pub const PAGESPEED_KEY_ENV: &str = "PAGESPEED_API_KEY";

/// Configuration for a single page analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Keyword used for the semantic density check
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Timeout for the page itself
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Timeout for robots.txt and sitemap.xml
    #[serde(default = "default_artifact_timeout")]
    pub artifact_timeout_secs: u64,

    /// Timeout for the page-speed service and the fallback probe
    #[serde(default = "default_pagespeed_timeout")]
    pub pagespeed_timeout_secs: u64,

    /// Characters kept from robots.txt and sitemap.xml
    #[serde(default = "default_artifact_max_chars")]
    pub artifact_max_chars: usize,

    /// Size of the word frequency table
    #[serde(default = "default_top_words")]
    pub top_words: usize,

    /// Whether page speed is measured at all
    #[serde(default = "default_pagespeed_enabled")]
    pub pagespeed_enabled: bool,

    /// API key for the page-speed service
    #[serde(default, skip_serializing)]
    pub pagespeed_api_key: Option<String>,
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply `PAGESPEED_API_KEY` if it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(PAGESPEED_KEY_ENV) {
            if !key.trim().is_empty() {
                self.pagespeed_api_key = Some(key.trim().to_string());
            }
        }
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            user_agent: default_user_agent(),
            page_timeout_secs: default_page_timeout(),
            artifact_timeout_secs: default_artifact_timeout(),
            pagespeed_timeout_secs: default_pagespeed_timeout(),
            artifact_max_chars: default_artifact_max_chars(),
            top_words: default_top_words(),
            pagespeed_enabled: default_pagespeed_enabled(),
            pagespeed_api_key: None,
        }
    }
}

fn default_keyword() -> String {
    "seo".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Free-SEO-Tool)".to_string()
}

fn default_page_timeout() -> u64 {
    15
}

fn default_artifact_timeout() -> u64 {
    10
}

fn default_pagespeed_timeout() -> u64 {
    15
}

fn default_artifact_max_chars() -> usize {
    1000
}

fn default_top_words() -> usize {
    20
}

fn default_pagespeed_enabled() -> bool {
    true
}
