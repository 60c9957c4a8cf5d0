use crate::extract::selector;
use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::OnceLock;

/// Head metadata of a page. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub viewport: String,
}

/// Extracts title, description, canonical URL and viewport
pub fn extract_metadata(doc: &Html) -> PageMetadata {
    static TITLE: OnceLock<Selector> = OnceLock::new();
    static DESCRIPTION: OnceLock<Selector> = OnceLock::new();
    static CANONICAL: OnceLock<Selector> = OnceLock::new();
    static VIEWPORT: OnceLock<Selector> = OnceLock::new();

    let title = doc
        .select(selector(&TITLE, "title"))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    PageMetadata {
        title,
        description: first_attr(
            doc,
            selector(&DESCRIPTION, r#"meta[name="description"]"#),
            "content",
        ),
        canonical: first_attr(doc, selector(&CANONICAL, r#"link[rel~="canonical"]"#), "href"),
        viewport: first_attr(
            doc,
            selector(&VIEWPORT, r#"meta[name="viewport"]"#),
            "content",
        ),
    }
}

/// Attribute of the first element matching `sel`, or an empty string
fn first_attr(doc: &Html, sel: &Selector, attr: &str) -> String {
    doc.select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.to_string())
        .unwrap_or_default()
}
