use crate::scoring::{AnalysisResult, Category, Improvement};
use serde::Serialize;

/// One step of the remediation roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapItem {
    pub category: Category,
    pub fix: String,
    pub expected_boost: u8,
}

/// Orders items by expected boost, highest first.
///
/// Equal boosts keep their input order.
pub fn prioritize(mut items: Vec<RoadmapItem>) -> Vec<RoadmapItem> {
    items.sort_by(|a, b| b.expected_boost.cmp(&a.expected_boost));
    items
}

/// All improvements of a result, highest expected boost first
pub fn build_roadmap(result: &AnalysisResult) -> Vec<RoadmapItem> {
    let items = result
        .categories()
        .into_iter()
        .flat_map(|(category, score)| {
            score
                .improvements
                .iter()
                .map(move |Improvement { fix, expected_boost }| RoadmapItem {
                    category,
                    fix: fix.clone(),
                    expected_boost: *expected_boost,
                })
        })
        .collect();

    prioritize(items)
}
