//! CSS selectors over a [`Document`], parsed and matched by `scraper`.
//!
//! Matching runs against an HTML rendering of the document in which every
//! element carries its node index, so matches map back to [`NodeId`]s.

use std::collections::HashSet;

use scraper::Html;
use thiserror::Error;

use crate::document::{Document, NodeId};

/// Attribute carrying the node index in the rendered markup.
const NODE_ATTR: &str = "data-formdom-node";

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("invalid selector '{selector}': {reason}")]
    Invalid { selector: String, reason: String },
}

/// A parsed selector.
#[derive(Debug, Clone)]
pub struct Selector {
    source: String,
    inner: scraper::Selector,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(SelectorError::Empty);
        }
        let inner = scraper::Selector::parse(source).map_err(|e| SelectorError::Invalid {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            source: source.to_string(),
            inner,
        })
    }

    /// The text this selector was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the selector text targets a single element by id (`#...`).
    pub fn is_id_selector(&self) -> bool {
        self.source.starts_with('#')
    }

    /// Every attached node of `doc` matching this selector, root included,
    /// in document order.
    pub fn select_all(&self, doc: &Document) -> Vec<NodeId> {
        let html = Html::parse_fragment(&render(doc));
        let matched: HashSet<NodeId> = html
            .select(&self.inner)
            .filter_map(|element| element.value().attr(NODE_ATTR))
            .filter_map(|index| index.parse().ok())
            .map(NodeId)
            .collect();

        log::trace!("[selector] '{}' matched {} node(s)", self.source, matched.len());

        let root = doc.root();
        std::iter::once(root)
            .chain(doc.descendants(root))
            .filter(|n| matched.contains(n))
            .collect()
    }
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Selector {}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Markup for the attached tree, each element tagged with [`NODE_ATTR`].
fn render(doc: &Document) -> String {
    let mut out = String::new();
    render_node(doc, doc.root(), &mut out);
    out
}

fn render_node(doc: &Document, id: NodeId, out: &mut String) {
    let node = doc.node(id);
    out.push('<');
    out.push_str(&node.tag);
    push_attr(out, NODE_ATTR, &id.0.to_string());
    for (name, value) in &node.attrs {
        if name != NODE_ATTR && !(name == "class" && !node.classes.is_empty()) {
            push_attr(out, name, value);
        }
    }
    if !node.classes.is_empty() {
        push_attr(out, "class", &node.classes.join(" "));
    }
    if node.hidden && !node.attrs.contains_key("hidden") {
        push_attr(out, "hidden", "");
    }
    out.push('>');

    if VOID_TAGS.contains(&node.tag.as_str()) {
        if !node.children.is_empty() {
            log::trace!("[selector] children of void <{}> {} not rendered", node.tag, id);
        }
        return;
    }

    out.push_str(&html_escape::encode_text(&node.text));
    for &child in &node.children {
        render_node(doc, child, out);
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}
