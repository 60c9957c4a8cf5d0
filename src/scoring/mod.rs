pub mod off_page;
pub mod on_page;
pub mod roadmap;
pub mod semantic;
pub mod technical;


pub use off_page::score_off_page;
pub use on_page::score_on_page;
pub use roadmap::{RoadmapItem, build_roadmap};
pub use semantic::score_semantic;
pub use technical::score_technical;

use crate::extract::PageSignals;
use crate::fetchers::SiteArtifact;
use serde::{Serialize, Serializer};

/// Highest score of any category
pub const MAX_SCORE: u8 = 100;

/// A concrete fix and the score it is expected to add
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub fix: String,
    pub expected_boost: u8,
}

/// Score of one category with what to do about it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    /// 0 - 100
    pub score: u8,
    pub suggestions: Vec<String>,
    pub improvements: Vec<Improvement>,
}

impl CategoryScore {
    /// A category with a fixed score and nothing to suggest yet
    pub fn with_score(score: u8) -> Self {
        Self {
            score: score.min(MAX_SCORE),
            ..Self::default()
        }
    }

    /// Add the points of a passing check
    pub fn award(&mut self, points: u8) {
        self.score = self.score.saturating_add(points).min(MAX_SCORE);
    }

    /// Record a failing check
    pub fn flag(&mut self, suggestion: impl Into<String>, fix: impl Into<String>, boost: u8) {
        self.suggestions.push(suggestion.into());
        self.improvements.push(Improvement {
            fix: fix.into(),
            expected_boost: boost,
        });
    }

    /// Record a note that has no fix attached
    pub fn note(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }
}

/// The four scoring categories, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    OnPage,
    Technical,
    OffPage,
    Semantic,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::OnPage => "On-Page SEO",
            Category::Technical => "Technical SEO",
            Category::OffPage => "Off-Page SEO",
            Category::Semantic => "Semantic SEO",
        }
    }
}

/// Coarse estimate of the search results position range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankBucket {
    Beyond50,
    Top50,
    Top20,
    Top10,
    Top3,
}

impl RankBucket {
    pub fn label(&self) -> &'static str {
        match self {
            RankBucket::Top3 => "1-3",
            RankBucket::Top10 => "4-10",
            RankBucket::Top20 => "11-20",
            RankBucket::Top50 => "21-50",
            RankBucket::Beyond50 => "50+",
        }
    }
}

impl Serialize for RankBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Scores of all categories plus the combined verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub on_page: CategoryScore,
    pub technical: CategoryScore,
    pub off_page: CategoryScore,
    pub semantic: CategoryScore,
    pub overall: u8,
    pub rank_bucket: RankBucket,
}

impl AnalysisResult {
    /// Combine the four category scores
    pub fn new(
        on_page: CategoryScore,
        technical: CategoryScore,
        off_page: CategoryScore,
        semantic: CategoryScore,
    ) -> Self {
        let overall = aggregate(&on_page, &technical, &off_page, &semantic);
        Self {
            on_page,
            technical,
            off_page,
            semantic,
            overall,
            rank_bucket: estimate_rank_bucket(overall),
        }
    }

    /// Categories in emission order
    pub fn categories(&self) -> [(Category, &CategoryScore); 4] {
        [
            (Category::OnPage, &self.on_page),
            (Category::Technical, &self.technical),
            (Category::OffPage, &self.off_page),
            (Category::Semantic, &self.semantic),
        ]
    }

    pub fn has_suggestions(&self) -> bool {
        self.categories()
            .iter()
            .any(|(_, score)| !score.suggestions.is_empty())
    }
}

/// Unweighted mean of the four scores, rounded half to even
pub fn aggregate(
    on_page: &CategoryScore,
    technical: &CategoryScore,
    off_page: &CategoryScore,
    semantic: &CategoryScore,
) -> u8 {
    let total: u32 = [on_page, technical, off_page, semantic]
        .iter()
        .map(|category| u32::from(category.score))
        .sum();
    let mean = f64::from(total) / 4.0;
    mean.round_ties_even().min(f64::from(MAX_SCORE)) as u8
}

/// Map an overall score to a rank bucket (inclusive lower bounds)
pub fn estimate_rank_bucket(overall: u8) -> RankBucket {
    match overall {
        90..=u8::MAX => RankBucket::Top3,
        80..=89 => RankBucket::Top10,
        70..=79 => RankBucket::Top20,
        60..=69 => RankBucket::Top50,
        _ => RankBucket::Beyond50,
    }
}

/// Run every sub-scorer over the extracted signals and fetched artifacts
pub fn score_page(
    signals: &PageSignals,
    robots: &SiteArtifact,
    sitemap: &SiteArtifact,
    keyword: &str,
) -> AnalysisResult {
    let result = AnalysisResult::new(
        score_on_page(&signals.metadata, &signals.headings, signals.words.total_words),
        score_technical(
            robots,
            sitemap,
            &signals.metadata.viewport,
            &signals.structured_data,
        ),
        score_off_page(),
        score_semantic(&signals.words.full_text, keyword),
    );

    ::log::info!(
        "Overall score {} (rank bucket {})",
        result.overall,
        result.rank_bucket.label()
    );
    result
}
