use crate::extract::selector;
use crate::utils::normalize_whitespace;
use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::OnceLock;

/// Heading tags collected from a page
pub const HEADING_LEVELS: [&str; 3] = ["h1", "h2", "h3"];

/// Heading text per level, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadingInventory {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

impl HeadingInventory {
    /// Headings for a tag name; unknown tags have none
    pub fn level(&self, tag: &str) -> &[String] {
        match tag {
            "h1" => &self.h1,
            "h2" => &self.h2,
            "h3" => &self.h3,
            _ => &[],
        }
    }

    /// `(tag, headings)` pairs in level order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        HEADING_LEVELS.into_iter().map(move |tag| (tag, self.level(tag)))
    }
}

/// Collects H1, H2 and H3 text. No deduplication.
pub fn extract_headings(doc: &Html) -> HeadingInventory {
    static H1: OnceLock<Selector> = OnceLock::new();
    static H2: OnceLock<Selector> = OnceLock::new();
    static H3: OnceLock<Selector> = OnceLock::new();

    HeadingInventory {
        h1: heading_text(doc, selector(&H1, "h1")),
        h2: heading_text(doc, selector(&H2, "h2")),
        h3: heading_text(doc, selector(&H3, "h3")),
    }
}

fn heading_text(doc: &Html, sel: &Selector) -> Vec<String> {
    doc.select(sel)
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .collect()
}
