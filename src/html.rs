//! Plain-text and image-reference extraction from note field markup.
//!
//! Field markup is parsed as an HTML fragment with html5ever (via `scraper`),
//! which never rejects input: unclosed or stray tags are repaired the way a
//! browser would, so both functions always return a best-effort result.

use scraper::node::Node;
use scraper::Html;

/// Elements whose text content is never visible.
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Visible text of `html`: every text node outside `<script>`/`<style>`,
/// concatenated in document order and trimmed.
pub fn extract_text(html: &str) -> String {
    let mut text = String::new();
    let mut images = Vec::new();
    walk(html, &mut text, &mut images);
    text.trim().to_string()
}

/// `src` of every `<img>` in document order. Images without a `src`, or with
/// an empty one, are skipped.
pub fn image_sources(html: &str) -> Vec<String> {
    let mut text = String::new();
    let mut images = Vec::new();
    walk(html, &mut text, &mut images);
    images
}

/// Collect text and image sources from `html` in document order.
///
/// html5ever parses with scripting enabled, which leaves the body of a
/// `<noscript>` as one raw text node; that text is parsed again as markup.
fn walk(html: &str, text: &mut String, images: &mut Vec<String>) {
    let fragment = Html::parse_fragment(html);

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Element(el) if el.name() == "img" => {
                if let Some(src) = el.attr("src").filter(|src| !src.is_empty()) {
                    images.push(src.to_string());
                }
            }
            Node::Text(chunk) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
                });
                if hidden {
                    continue;
                }

                let in_noscript = node
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .is_some_and(|el| el.name() == "noscript");
                if in_noscript {
                    walk(chunk, text, images);
                } else {
                    text.push_str(chunk);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_only_trimmed() {
        assert_eq!(extract_text("  What is 2+2?  "), "What is 2+2?");
        assert_eq!(extract_text("no markup at all"), "no markup at all");
        assert_eq!(extract_text("inner   spacing\tkept"), "inner   spacing\tkept");
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(extract_text("<b>Hello</b> World"), "Hello World");
        assert_eq!(extract_text("<div><p>Nested</p></div>"), "Nested");
        assert_eq!(extract_text("What is 2+2?<img src='1'>"), "What is 2+2?");
    }

    #[test]
    fn test_removes_script_and_style() {
        assert_eq!(
            extract_text("<style>.card { color: red; }</style>Styled<script>alert(1)</script>"),
            "Styled"
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(extract_text("Tom &amp; Jerry&nbsp;"), "Tom & Jerry");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(extract_text("<span>水</span> (みず)"), "水 (みず)");
    }

    #[test]
    fn test_malformed_markup_does_not_fail() {
        assert_eq!(extract_text("<div>unclosed <b>bold"), "unclosed bold");
        assert_eq!(extract_text("</p>stray close"), "stray close");
        assert_eq!(extract_text("<"), "<");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_noscript_content_is_markup() {
        assert_eq!(extract_text("A<noscript><b>B</b></noscript>C"), "ABC");
        assert_eq!(
            extract_text("<noscript>x &amp; <i>y</i><script>z</script></noscript>"),
            "x & y"
        );
    }

    #[test]
    fn test_image_sources_inside_noscript() {
        let html = r#"<noscript><img src="n.png"></noscript><img src="a.png">"#;
        assert_eq!(image_sources(html), vec!["n.png", "a.png"]);
    }

    #[test]
    fn test_image_sources_in_order() {
        let html = r#"<img src="first.png"><p>text</p><img src='second.jpg'>"#;
        assert_eq!(image_sources(html), vec!["first.png", "second.jpg"]);
    }

    #[test]
    fn test_image_sources_skip_missing_src() {
        let html = r#"<img alt="no source"><img src=""><img src="0">"#;
        assert_eq!(image_sources(html), vec!["0"]);
    }

    #[test]
    fn test_image_sources_none() {
        assert!(image_sources("just text").is_empty());
    }

    #[test]
    fn test_image_sources_in_unclosed_markup() {
        assert_eq!(image_sources("<div><span><img src=1>"), vec!["1"]);
    }
}
