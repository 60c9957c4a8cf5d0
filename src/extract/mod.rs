pub mod headings;
pub mod meta;
pub mod structured;
pub mod words;

#[cfg(test)]
mod tests;

pub use headings::{HeadingInventory, extract_headings};
pub use meta::{PageMetadata, extract_metadata};
pub use structured::{StructuredData, extract_structured_data};
pub use words::{WordCount, WordStats, extract_word_stats};

use scraper::{Html, Selector};
use serde::Serialize;
use std::sync::OnceLock;

/// Everything the scorers need from a page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageSignals {
    pub metadata: PageMetadata,
    pub headings: HeadingInventory,
    pub words: WordStats,
    pub structured_data: StructuredData,
}

/// Parses HTML and extracts all on-page signals
pub fn extract_signals(html: &str, top_words: usize) -> PageSignals {
    let doc = Html::parse_document(html);

    let signals = PageSignals {
        metadata: extract_metadata(&doc),
        headings: extract_headings(&doc),
        words: extract_word_stats(&doc, top_words),
        structured_data: extract_structured_data(&doc),
    };

    ::log::debug!(
        "Extracted title {:?}, {} H1, {} words",
        signals.metadata.title,
        signals.headings.h1.len(),
        signals.words.total_words
    );
    signals
}

/// Selector compiled once per call site
pub(crate) fn selector(cell: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cell.get_or_init(|| Selector::parse(css).expect("selector is valid CSS"))
}
