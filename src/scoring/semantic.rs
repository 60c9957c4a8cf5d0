use crate::extract::words::tokenize;
use crate::scoring::{CategoryScore, MAX_SCORE};
use serde::Serialize;

/// Density range (percent) that gets no suggestion
pub const TARGET_DENSITY: std::ops::RangeInclusive<f64> = 1.0..=5.0;

const FIX_BOOST: u8 = 10;

/// Keyword usage in a text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub occurrences: usize,
    pub total_words: usize,
    /// occurrences / total_words * 100, 0 for empty text
    pub percent: f64,
}

/// Non-overlapping, case-insensitive substring matches of `keyword`.
///
/// Substrings count: "seo" matches inside "seotools".
pub fn count_occurrences(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(keyword.as_str()).count()
}

pub fn keyword_density(text: &str, keyword: &str) -> KeywordDensity {
    let occurrences = count_occurrences(text, keyword);
    let total_words = tokenize(text).count();
    let percent = if total_words == 0 {
        0.0
    } else {
        occurrences as f64 / total_words as f64 * 100.0
    };

    KeywordDensity {
        occurrences,
        total_words,
        percent,
    }
}

/// Scores keyword density: min(100, density * 2), truncated
pub fn score_semantic(full_text: &str, keyword: &str) -> CategoryScore {
    let density = keyword_density(full_text, keyword);
    let score = (density.percent * 2.0).min(f64::from(MAX_SCORE)) as u8;
    let mut category = CategoryScore::with_score(score);

    if density.percent < *TARGET_DENSITY.start() {
        category.flag(
            format!(
                "Use the keyword \"{}\" more frequently (density {:.2}%, aim for 1-5%).",
                keyword, density.percent
            ),
            format!("Work \"{}\" naturally into headings and body text", keyword),
            FIX_BOOST,
        );
    } else if density.percent > *TARGET_DENSITY.end() {
        category.flag(
            format!(
                "Keyword density for \"{}\" is too high ({:.2}%); reduce keyword stuffing.",
                keyword, density.percent
            ),
            format!("Replace some uses of \"{}\" with synonyms", keyword),
            FIX_BOOST,
        );
    }

    category
}
