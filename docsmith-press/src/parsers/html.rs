//! HTML parsing (HTML → markup tree)
//!
//! Converts an HTML string into the generic markup tree.
//! Pipeline: HTML string → html5ever RcDom → MarkupNode tree
//!
//! html5ever runs the full HTML5 tree-construction algorithm, so fragments
//! like `<p>hi</p>` come back wrapped in `html`/`head`/`body` the same way a
//! browser would wrap them. The tree handed to callers contains only the
//! children of `body`; element attributes, comments, doctypes and processing
//! instructions are dropped because the block model never looks at them.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::ConvertError;
use crate::parser::MarkupParser;
use crate::tree::MarkupNode;

/// Parser for HTML sources
pub struct HtmlParser;

impl MarkupParser for HtmlParser {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML documents or fragments"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn parse(&self, source: &str) -> Result<Vec<MarkupNode>, ConvertError> {
        tree_from_html(source)
    }
}

/// Parse an HTML string into the children of its `body` element
pub fn tree_from_html(source: &str) -> Result<Vec<MarkupNode>, ConvertError> {
    let dom: RcDom = parse_document(RcDom::default(), Default::default()).one(source);

    let html = find_element_child(&dom.document, "html")
        .ok_or_else(|| ConvertError::MalformedTree("document has no html element".to_string()))?;
    let body = find_element_child(&html, "body")
        .ok_or_else(|| ConvertError::MalformedTree("document has no body element".to_string()))?;

    Ok(convert_children(&body))
}

fn find_element_child(node: &Handle, tag: &str) -> Option<Handle> {
    node.children
        .borrow()
        .iter()
        .find(|child| match &child.data {
            NodeData::Element { name, .. } => name.local.as_ref() == tag,
            _ => false,
        })
        .cloned()
}

fn convert_children(node: &Handle) -> Vec<MarkupNode> {
    node.children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(node: &Handle) -> Option<MarkupNode> {
    match &node.data {
        NodeData::Element { name, .. } => Some(MarkupNode::element(
            name.local.to_string(),
            convert_children(node),
        )),
        NodeData::Text { contents } => Some(MarkupNode::text(contents.borrow().to_string())),
        // Comments, doctypes and processing instructions have no place in
        // the block model.
        _ => None,
    }
}
