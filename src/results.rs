use crate::extract::PageSignals;
use crate::fetchers::{PerformanceReading, SiteArtifact};
use crate::scoring::{AnalysisResult, RoadmapItem};
use serde::Serialize;

/// Everything produced by one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// URL that was analyzed
    pub url: String,

    /// Keyword used for the semantic score
    pub keyword: String,

    /// Category scores, overall score and rank bucket
    pub analysis: AnalysisResult,

    /// Improvements, highest expected boost first
    pub roadmap: Vec<RoadmapItem>,

    /// Raw signals extracted from the page
    pub signals: PageSignals,

    pub robots: SiteArtifact,
    pub sitemap: SiteArtifact,
    pub performance: PerformanceReading,
}
