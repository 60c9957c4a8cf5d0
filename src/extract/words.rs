use regex::Regex;
use scraper::{Html, Node};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Elements whose text is never rendered
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// One row of the word frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word statistics of the visible page text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordStats {
    /// Number of word tokens
    pub total_words: usize,
    /// Most frequent lowercased words, highest count first
    pub top_words: Vec<WordCount>,
    /// Visible text joined with single spaces
    #[serde(skip)]
    pub full_text: String,
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Splits text into word tokens (runs of Unicode letters, digits and `_`).
///
/// This is the only tokenizer in the crate; keyword density uses it too.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    word_regex().find_iter(text).map(|m| m.as_str())
}

/// Visible text nodes joined with single spaces
pub fn visible_text(doc: &Html) -> String {
    doc.root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
                });
                if hidden { None } else { Some(text.trim()) }
            }
            _ => None,
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased word counts, highest first, at most `limit` rows.
///
/// Words with equal counts keep the order in which they first appeared.
pub fn word_frequencies(text: &str, limit: usize) -> Vec<WordCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for token in tokenize(text) {
        let word = token.to_lowercase();
        match index.get(&word) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push(WordCount { word, count: 1 });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Word count, frequency table and full text of a document
pub fn extract_word_stats(doc: &Html, limit: usize) -> WordStats {
    let full_text = visible_text(doc);

    WordStats {
        total_words: tokenize(&full_text).count(),
        top_words: word_frequencies(&full_text, limit),
        full_text,
    }
}
