pub mod artifacts;
pub mod fetcher;
pub mod http;
pub mod pagespeed;

#[cfg(test)]
mod tests;

pub use artifacts::{ArtifactKind, SiteArtifact, fetch_site_artifact, site_root};
pub use fetcher::{Fetch, FetchError};
pub use http::HttpFetcher;
pub use pagespeed::{PerformanceReading, measure_performance};
