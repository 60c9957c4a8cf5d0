use crate::scoring::CategoryScore;

/// Score given to every page until backlink data is available
pub const OFF_PAGE_PLACEHOLDER_SCORE: u8 = 50;

/// Placeholder for backlink and domain authority analysis.
///
/// Nothing off-page is measured: the score is constant.
pub fn score_off_page() -> CategoryScore {
    let mut category = CategoryScore::with_score(OFF_PAGE_PLACEHOLDER_SCORE);
    category.flag(
        "Check backlinks and domain authority.",
        "Earn backlinks from relevant, authoritative sites",
        5,
    );
    category
}
