use crate::extract::{self, extract_headings, extract_metadata, extract_structured_data};
use scraper::Html;

#[cfg(test)]
mod metadata_tests {
    use super::*;

    #[test]
    fn test_full_metadata() {
        let doc = Html::parse_document(
            r#"<html><head>
                <title>  Rust SEO Guide  </title>
                <meta name="description" content="Learn how to audit pages.">
                <link rel="canonical" href="https://example.com/guide">
                <meta name="viewport" content="width=device-width, initial-scale=1">
            </head><body></body></html>"#,
        );
        let meta = extract_metadata(&doc);
        assert_eq!(meta.title, "Rust SEO Guide");
        assert_eq!(meta.description, "Learn how to audit pages.");
        assert_eq!(meta.canonical, "https://example.com/guide");
        assert_eq!(meta.viewport, "width=device-width, initial-scale=1");
    }

    #[test]
    fn test_missing_metadata_is_empty() {
        let doc = Html::parse_document("<html><body><p>Hello</p></body></html>");
        let meta = extract_metadata(&doc);
        assert_eq!(meta.title, "");
        assert_eq!(meta.description, "");
        assert_eq!(meta.canonical, "");
        assert_eq!(meta.viewport, "");
    }

    #[test]
    fn test_description_without_content_attribute() {
        let doc = Html::parse_document(r#"<html><head><meta name="description"></head></html>"#);
        assert_eq!(extract_metadata(&doc).description, "");
    }

    #[test]
    fn test_first_title_wins() {
        let doc = Html::parse_document(
            "<html><head><title>First</title><title>Second</title></head></html>",
        );
        assert_eq!(extract_metadata(&doc).title, "First");
    }

    #[test]
    fn test_canonical_among_other_rel_values() {
        let doc = Html::parse_document(
            r#"<html><head>
                <link rel="stylesheet" href="/style.css">
                <link rel="canonical alternate" href="/canonical">
            </head></html>"#,
        );
        assert_eq!(extract_metadata(&doc).canonical, "/canonical");
    }
}

#[cfg(test)]
mod heading_tests {
    use super::*;

    #[test]
    fn test_headings_in_document_order() {
        let doc = Html::parse_document(
            r#"<html><body>
                <h2>Second level A</h2>
                <h1>  Main   title </h1>
                <h3>Third</h3>
                <h2>Second level B</h2>
                <h2>Second level A</h2>
            </body></html>"#,
        );
        let headings = extract_headings(&doc);
        assert_eq!(headings.h1, vec!["Main title"]);
        // No deduplication
        assert_eq!(
            headings.h2,
            vec!["Second level A", "Second level B", "Second level A"]
        );
        assert_eq!(headings.h3, vec!["Third"]);
    }

    #[test]
    fn test_nested_markup_in_heading() {
        let doc = Html::parse_document("<h1>Hello <em>big</em> world</h1>");
        assert_eq!(extract_headings(&doc).h1, vec!["Hello big world"]);
    }

    #[test]
    fn test_missing_levels_are_empty() {
        let doc = Html::parse_document("<p>No headings here</p>");
        let headings = extract_headings(&doc);
        for (tag, values) in headings.iter() {
            assert!(values.is_empty(), "{} should be empty", tag);
        }
        assert!(headings.level("h4").is_empty());
    }
}

#[cfg(test)]
mod structured_data_tests {
    use super::*;

    #[test]
    fn test_json_ld_blocks() {
        let doc = Html::parse_document(
            r#"<html><head>
                <script type="application/ld+json">{"@type": "Organization", "name": "Acme"}</script>
                <script type="application/javascript">var x = 1;</script>
                <script type="application/ld+json">[{"@type": "WebSite"}]</script>
            </head></html>"#,
        );
        let data = extract_structured_data(&doc);
        assert_eq!(data.blocks.len(), 2);
        assert_eq!(data.blocks[0]["name"], "Acme");
        assert!(data.blocks[1].is_array());
        assert_eq!(data.malformed, 0);
        assert!(data.is_present());
    }

    #[test]
    fn test_malformed_block_is_skipped() {
        let doc = Html::parse_document(
            r#"<html><head>
                <script type="application/ld+json">{"@type": "Organization",</script>
                <script type="application/ld+json">{"@type": "Product"}</script>
                <script type="application/ld+json">   </script>
            </head></html>"#,
        );
        let data = extract_structured_data(&doc);
        assert_eq!(data.blocks.len(), 1);
        assert_eq!(data.blocks[0]["@type"], "Product");
        assert_eq!(data.malformed, 2);
    }

    #[test]
    fn test_no_structured_data() {
        let doc = Html::parse_document("<html><body></body></html>");
        let data = extract_structured_data(&doc);
        assert!(!data.is_present());
        assert_eq!(data.malformed, 0);
    }
}

#[cfg(test)]
mod signals_tests {
    use super::*;

    #[test]
    fn test_extract_signals() {
        let html = r#"<html><head><title>Signals</title>
            <meta name="viewport" content="width=device-width"></head>
            <body><h1>Heading</h1><p>one two two</p></body></html>"#;
        let signals = extract::extract_signals(html, 20);
        assert_eq!(signals.metadata.title, "Signals");
        assert_eq!(signals.metadata.viewport, "width=device-width");
        assert_eq!(signals.headings.h1, vec!["Heading"]);
        // "Signals Heading one two two"
        assert_eq!(signals.words.total_words, 5);
        assert_eq!(signals.words.top_words[0].word, "two");
        assert!(!signals.structured_data.is_present());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let html = "<html><head><title>Same</title></head><body><p>b a c a b</p></body></html>";
        assert_eq!(
            extract::extract_signals(html, 20),
            extract::extract_signals(html, 20)
        );
    }
}
