//! Markdown parsing (Markdown → markup tree)
//!
//! Converts CommonMark Markdown to the generic markup tree.
//! Pipeline: Markdown string → Comrak HTML → html5ever RcDom → MarkupNode tree
//!
//! Rendering through HTML rather than walking the Comrak AST directly means
//! Markdown and HTML sources flow through identical tree shapes, and raw HTML
//! embedded in Markdown needs no separate handling.

use comrak::{markdown_to_html, ComrakOptions};

use crate::error::ConvertError;
use crate::parser::MarkupParser;
use crate::parsers::html::tree_from_html;
use crate::tree::MarkupNode;

/// Parser for Markdown sources
pub struct MarkdownParser;

impl MarkupParser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with table and strikethrough extensions"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn parse(&self, source: &str) -> Result<Vec<MarkupNode>, ConvertError> {
        parse_from_markdown(source)
    }
}

/// Parse a Markdown string into the top-level nodes of a markup tree
pub fn parse_from_markdown(source: &str) -> Result<Vec<MarkupNode>, ConvertError> {
    let options = default_comrak_options();
    let html = markdown_to_html(source, &options);
    tree_from_html(&html)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    // Raw HTML blocks in the source stay in the rendered output instead of
    // being escaped, so embedded elements reach the tree.
    options.render.unsafe_ = true;
    options
}
