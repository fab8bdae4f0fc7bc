use scraper::{Html, Selector};
use tracing::debug;

/// Raw `href` attribute values from `<a>` elements, in document order.
///
/// Values come back exactly as authored: relative paths, fragments,
/// `mailto:` targets and malformed strings are all preserved for the
/// normalizer to deal with.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let link_selector = Selector::parse("a[href]").unwrap();
    let mut hrefs = Vec::new();

    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href") {
            hrefs.push(href.to_string());
        }
    }

    debug!("Extracted {} hrefs", hrefs.len());
    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_hrefs_in_document_order() {
        let html = r#"<html><body>
            <a href="first.html">First</a>
            <p><a href="/second">Second</a></p>
            <a href="https://x.test/third">Third</a>
        </body></html>"#;

        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["first.html", "/second", "https://x.test/third"]);
    }

    #[test]
    fn skips_anchors_without_href() {
        let html = r#"<a name="top">Anchor</a><a href="page.html">Link</a>"#;

        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["page.html"]);
    }

    #[test]
    fn keeps_duplicate_hrefs() {
        let html = r#"<a href="a.html">One</a><a href="a.html">Two</a>"#;

        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["a.html", "a.html"]);
    }

    #[test]
    fn preserves_raw_values_untouched() {
        let html = r##"<body>
            <a href="../up.html">Up</a>
            <a href="#section">Fragment</a>
            <a href="mailto:web@x.test">Mail</a>
            <a href="dir\page.html">Backslash</a>
        </body>"##;

        let hrefs = extract_hrefs(html);
        assert_eq!(
            hrefs,
            vec!["../up.html", "#section", "mailto:web@x.test", r"dir\page.html"]
        );
    }

    #[test]
    fn empty_document_yields_no_hrefs() {
        assert!(extract_hrefs("").is_empty());
        assert!(extract_hrefs("<html><body><p>No links</p></body></html>").is_empty());
    }

    #[test]
    fn tolerates_malformed_markup() {
        let html = r#"<html><body><a href="kept.html">Unclosed<div><a href="also.html""#;

        let hrefs = extract_hrefs(html);
        assert!(hrefs.contains(&"kept.html".to_string()));
    }
}
