use crate::extract::{HeadingInventory, PageMetadata};
use crate::scoring::CategoryScore;
use std::ops::RangeInclusive;

/// Accepted title length in characters
pub const TITLE_LENGTH: RangeInclusive<usize> = 10..=60;
/// Accepted meta description length in characters
pub const DESCRIPTION_LENGTH: RangeInclusive<usize> = 50..=160;
/// Minimum number of words on the page
pub const MIN_WORDS: usize = 300;

const CHECK_POINTS: u8 = 20;
const FIX_BOOST: u8 = 10;

/// Scores title, description, H1, content length and canonical tag.
///
/// Each of the five checks is worth 20 points.
pub fn score_on_page(
    metadata: &PageMetadata,
    headings: &HeadingInventory,
    total_words: usize,
) -> CategoryScore {
    let mut category = CategoryScore::default();

    let title_len = metadata.title.chars().count();
    if TITLE_LENGTH.contains(&title_len) {
        category.award(CHECK_POINTS);
    } else if title_len == 0 {
        category.flag(
            "Add a title tag.",
            "Add a descriptive 10-60 character <title>",
            FIX_BOOST,
        );
    } else {
        category.flag(
            format!(
                "Title length is {} characters; keep it between 10 and 60.",
                title_len
            ),
            "Rewrite the title to 10-60 characters",
            FIX_BOOST,
        );
    }

    let description_len = metadata.description.chars().count();
    if DESCRIPTION_LENGTH.contains(&description_len) {
        category.award(CHECK_POINTS);
    } else if description_len == 0 {
        category.flag(
            "Add a meta description.",
            "Write a 50-160 character meta description",
            FIX_BOOST,
        );
    } else if description_len < *DESCRIPTION_LENGTH.start() {
        category.flag(
            format!("Meta description too short ({} characters).", description_len),
            "Expand the meta description to at least 50 characters",
            FIX_BOOST,
        );
    } else {
        category.flag(
            format!("Meta description too long ({} characters).", description_len),
            "Trim the meta description to at most 160 characters",
            FIX_BOOST,
        );
    }

    if !headings.h1.is_empty() {
        category.award(CHECK_POINTS);
    } else {
        category.flag(
            "Add at least one H1 heading.",
            "Add an H1 heading that states the page topic",
            FIX_BOOST,
        );
    }

    if total_words >= MIN_WORDS {
        category.award(CHECK_POINTS);
    } else {
        category.flag(
            format!(
                "Add more content (minimum {} words, found {}).",
                MIN_WORDS, total_words
            ),
            format!("Expand the page body to at least {} words", MIN_WORDS),
            FIX_BOOST,
        );
    }

    if !metadata.canonical.is_empty() {
        category.award(CHECK_POINTS);
    } else {
        category.flag(
            "Add a canonical tag.",
            "Add <link rel=\"canonical\"> pointing at the preferred URL",
            FIX_BOOST,
        );
    }

    category
}
