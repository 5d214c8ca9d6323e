// src/core/html.rs
// Markup → flat text. The HTML5 parser recovers from broken markup on its own;
// we only record that it had to.

use scraper::{Html, Node};

use super::net::RawDocument;

/// Elements whose text never reaches the screen.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Markup-free text of one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainText(String);

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self { Self(text.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

#[derive(Clone, Debug)]
pub struct Extraction {
    pub text: PlainText,
    /// The parser hit malformed markup and recovered (best-effort text).
    pub degraded: bool,
}

pub fn extract_text(doc: RawDocument) -> Extraction {
    extract_text_from_str(&doc.body)
}

/// Concatenate every visible text node in document order, no separators.
pub fn extract_text_from_str(markup: &str) -> Extraction {
    let html = Html::parse_document(markup);

    let mut out = String::with_capacity(markup.len() / 2);
    for node in html.root_element().descendants() {
        let Node::Text(text) = node.value() else { continue };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            out.push_str(text);
        }
    }

    let degraded = !html.errors.is_empty();
    if degraded {
        logd!("Extract: recovered from {} markup error(s)", html.errors.len());
    }

    Extraction { text: PlainText(out), degraded }
}
