use crate::extract::StructuredData;
use crate::fetchers::SiteArtifact;
use crate::scoring::CategoryScore;

const ROBOTS_POINTS: u8 = 30;
const SITEMAP_POINTS: u8 = 30;
const VIEWPORT_POINTS: u8 = 20;
const STRUCTURED_DATA_POINTS: u8 = 20;

/// Scores crawlability and mobile readiness: 30 + 30 + 20 + 20 points.
///
/// robots.txt and sitemap.xml count when they were fetched, whatever their
/// content.
pub fn score_technical(
    robots: &SiteArtifact,
    sitemap: &SiteArtifact,
    viewport: &str,
    structured_data: &StructuredData,
) -> CategoryScore {
    let mut category = CategoryScore::default();

    if robots.is_available() {
        category.award(ROBOTS_POINTS);
    } else {
        category.flag(
            "robots.txt is missing or unreachable.",
            "Publish a robots.txt at the site root",
            15,
        );
    }

    if sitemap.is_available() {
        category.award(SITEMAP_POINTS);
    } else {
        category.flag(
            "sitemap.xml is missing or unreachable.",
            "Publish a sitemap.xml and reference it from robots.txt",
            15,
        );
    }

    if !viewport.is_empty() {
        category.award(VIEWPORT_POINTS);
    } else {
        category.flag(
            "Add a viewport meta tag for mobile devices.",
            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            10,
        );
    }

    if structured_data.is_present() {
        category.award(STRUCTURED_DATA_POINTS);
    } else {
        category.flag(
            "Add JSON-LD structured data.",
            "Describe the page with schema.org JSON-LD",
            10,
        );
    }

    if structured_data.malformed > 0 {
        category.note(format!(
            "{} JSON-LD block(s) are not valid JSON and were ignored.",
            structured_data.malformed
        ));
    }

    category
}
