use std::str::FromStr;

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// Article container used by the news pages the tool was first written for.
pub const DEFAULT_ARTICLE_SELECTOR: &str = "article.article#mp-editor";

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub title: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("no content matched {selector:?}; the page structure may differ")]
    ContentNotFound { selector: String },
}

/// Turns a whole HTML document into the text that gets counted.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<ExtractedText, ExtractionError>;
}

/// Text of the first element matching a CSS selector.
#[derive(Debug, Clone)]
pub struct SelectorExtractor {
    source: String,
    selector: Selector,
}

impl SelectorExtractor {
    pub fn new(selector: &str) -> Result<Self, ExtractionError> {
        let parsed = parse_selector(selector)?;
        Ok(Self {
            source: selector.to_string(),
            selector: parsed,
        })
    }

    pub fn selector(&self) -> &str {
        &self.source
    }
}

impl Extractor for SelectorExtractor {
    fn extract(&self, html: &str) -> Result<ExtractedText, ExtractionError> {
        let doc = Html::parse_document(html);
        let node = doc
            .select(&self.selector)
            .next()
            .ok_or_else(|| ExtractionError::ContentNotFound {
                selector: self.source.clone(),
            })?;
        Ok(ExtractedText {
            title: document_title(&doc),
            text: element_text(node),
        })
    }
}

/// Concatenated text of every `<a>` element, one anchor per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnchorTextExtractor;

impl Extractor for AnchorTextExtractor {
    fn extract(&self, html: &str) -> Result<ExtractedText, ExtractionError> {
        let doc = Html::parse_document(html);
        let anchors = parse_selector("a")?;
        let lines: Vec<String> = doc
            .select(&anchors)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ExtractionError::ContentNotFound {
                selector: "a".to_string(),
            });
        }
        Ok(ExtractedText {
            title: document_title(&doc),
            text: lines.join("\n"),
        })
    }
}

/// `<article>` if present, otherwise `<body>`, otherwise the whole document.
/// Never fails; a page without text yields an empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityLikeExtractor;

impl Extractor for ReadabilityLikeExtractor {
    fn extract(&self, html: &str) -> Result<ExtractedText, ExtractionError> {
        let doc = Html::parse_document(html);
        let node = ["article", "body"]
            .into_iter()
            .filter_map(|tag| Selector::parse(tag).ok())
            .find_map(|sel| doc.select(&sel).next())
            .unwrap_or_else(|| doc.root_element());
        Ok(ExtractedText {
            title: document_title(&doc),
            text: element_text(node),
        })
    }
}

/// Named extraction strategy, as chosen in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    #[default]
    Selector,
    Anchors,
    Readability,
}

impl ExtractorKind {
    /// `selector` only applies to [`ExtractorKind::Selector`]; `None` means
    /// [`DEFAULT_ARTICLE_SELECTOR`].
    pub fn build(self, selector: Option<&str>) -> Result<Box<dyn Extractor>, ExtractionError> {
        let extractor: Box<dyn Extractor> = match self {
            ExtractorKind::Selector => Box::new(SelectorExtractor::new(
                selector.unwrap_or(DEFAULT_ARTICLE_SELECTOR),
            )?),
            ExtractorKind::Anchors => Box::new(AnchorTextExtractor),
            ExtractorKind::Readability => Box::new(ReadabilityLikeExtractor),
        };
        Ok(extractor)
    }
}

impl FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selector" => Ok(ExtractorKind::Selector),
            "anchors" | "links" => Ok(ExtractorKind::Anchors),
            "readability" => Ok(ExtractorKind::Readability),
            other => Err(format!(
                "unknown extractor {other:?} (expected selector, anchors or readability)"
            )),
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|err| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

fn document_title(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").ok()?;
    doc.select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Stripped, non-empty text nodes joined by newlines.
fn element_text(element: ElementRef<'_>) -> String {
    let mut lines = Vec::new();
    for child in element.children() {
        collect_text(child, &mut lines);
    }
    lines.join("\n")
}

fn collect_text(node: NodeRef<'_, Node>, lines: &mut Vec<String>) {
    match node.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        Node::Element(element) if SKIPPED_TAGS.contains(&element.name()) => {}
        _ => {
            for child in node.children() {
                collect_text(child, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{element_text, Html, Selector};

    #[test]
    fn element_text_skips_scripts_and_blank_nodes() {
        let doc = Html::parse_fragment(
            "<div> <p>first</p>\n<script>var x = 1;</script><p> second </p></div>",
        );
        let sel = Selector::parse("div").unwrap();
        let div = doc.select(&sel).next().unwrap();
        assert_eq!(element_text(div), "first\nsecond");
    }
}
