use crate::fetchers::fetcher::Fetch;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Site-level files fetched from the root of the analyzed site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Robots,
    Sitemap,
}

impl ArtifactKind {
    /// File name at the site root
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Robots => "robots.txt",
            ArtifactKind::Sitemap => "sitemap.xml",
        }
    }

    /// Absolute path of the file on the site
    pub fn path(&self) -> &'static str {
        match self {
            ArtifactKind::Robots => "/robots.txt",
            ArtifactKind::Sitemap => "/sitemap.xml",
        }
    }

    /// Placeholder text shown when the file could not be fetched
    pub fn unavailable_text(&self) -> String {
        format!("{} not available", self.file_name())
    }
}

/// Outcome of fetching robots.txt or sitemap.xml
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteArtifact {
    /// The file was fetched; `body` is truncated
    Fetched {
        kind: ArtifactKind,
        url: String,
        body: String,
    },
    /// The file could not be fetched
    Unavailable {
        kind: ArtifactKind,
        url: String,
        reason: String,
    },
}

impl SiteArtifact {
    /// Classify plain text that may be the "not available" placeholder.
    ///
    /// The placeholder is matched case-insensitively anywhere in `text`.
    pub fn from_text(kind: ArtifactKind, url: &str, text: &str) -> Self {
        let sentinel = kind.unavailable_text();
        if text.to_lowercase().contains(&sentinel) {
            SiteArtifact::Unavailable {
                kind,
                url: url.to_string(),
                reason: text.to_string(),
            }
        } else {
            SiteArtifact::Fetched {
                kind,
                url: url.to_string(),
                body: text.to_string(),
            }
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            SiteArtifact::Fetched { kind, .. } | SiteArtifact::Unavailable { kind, .. } => *kind,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            SiteArtifact::Fetched { url, .. } | SiteArtifact::Unavailable { url, .. } => url,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SiteArtifact::Fetched { .. })
    }

    /// Body of the file, or the "not available" placeholder
    pub fn display_text(&self) -> String {
        match self {
            SiteArtifact::Fetched { body, .. } => body.clone(),
            SiteArtifact::Unavailable { kind, .. } => kind.unavailable_text(),
        }
    }
}

/// Scheme, host and explicit port of `url`, e.g. `https://example.com:8443`
pub fn site_root(url: &Url) -> Option<String> {
    if !url.has_host() {
        return None;
    }
    Some(url.origin().ascii_serialization())
}

/// URL of a site artifact for the site `page_url` belongs to
pub fn artifact_url(page_url: &Url, kind: ArtifactKind) -> Option<Url> {
    let root = site_root(page_url)?;
    Url::parse(&root).ok()?.join(kind.path()).ok()
}

/// Fetch robots.txt or sitemap.xml. Never fails: errors become `Unavailable`.
pub async fn fetch_site_artifact<F: Fetch>(
    fetcher: &F,
    page_url: &Url,
    kind: ArtifactKind,
    timeout: Duration,
    max_chars: usize,
) -> SiteArtifact {
    let Some(url) = artifact_url(page_url, kind) else {
        return SiteArtifact::Unavailable {
            kind,
            url: String::new(),
            reason: format!("{} has no host", page_url),
        };
    };

    ::log::info!("Fetching {}", url);
    match fetcher.get_limited(&url, timeout, max_chars).await {
        Ok(body) => SiteArtifact::Fetched {
            kind,
            url: url.to_string(),
            body,
        },
        Err(err) => {
            ::log::warn!("{} unavailable: {}", kind.file_name(), err);
            SiteArtifact::Unavailable {
                kind,
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

