use crate::extract::selector;
use scraper::{Html, Selector};
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

/// JSON-LD blocks found on a page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredData {
    /// Blocks that parsed as JSON, in document order
    pub blocks: Vec<Value>,
    /// Blocks that were skipped because they are not valid JSON
    pub malformed: usize,
}

impl StructuredData {
    pub fn is_present(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// Parse the text of one JSON-LD script
pub fn parse_block(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

/// Collects every `<script type="application/ld+json">` block.
///
/// Malformed blocks are logged and counted, never fatal.
pub fn extract_structured_data(doc: &Html) -> StructuredData {
    static JSON_LD: OnceLock<Selector> = OnceLock::new();

    let mut data = StructuredData::default();
    for (i, script) in doc
        .select(selector(&JSON_LD, r#"script[type="application/ld+json"]"#))
        .enumerate()
    {
        let raw = script.text().collect::<String>();
        match parse_block(&raw) {
            Ok(value) => data.blocks.push(value),
            Err(e) => {
                ::log::warn!("Skipping malformed JSON-LD block {}: {}", i + 1, e);
                data.malformed += 1;
            }
        }
    }

    ::log::debug!(
        "Found {} JSON-LD blocks ({} malformed)",
        data.blocks.len(),
        data.malformed
    );
    data
}
