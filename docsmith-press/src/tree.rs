//! The markup tree handed to the walker.
//!
//! Parsers produce a vector of [`MarkupNode`] siblings, one per top-level
//! element of the source document. The tree is owned, acyclic, built once per
//! conversion and read-only afterwards. Element attributes are deliberately
//! not represented; nothing downstream consumes them.

/// One node of the parsed markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    /// An element with a tag name and ordered children.
    Element {
        tag: String,
        children: Vec<MarkupNode>,
    },
    /// A raw text node.
    Text { content: String },
}

impl MarkupNode {
    /// Shorthand for building an element node.
    pub fn element(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element {
            tag: tag.into(),
            children,
        }
    }

    /// Shorthand for building a text node.
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text {
            content: content.into(),
        }
    }

    /// The tag name, or `None` for text nodes.
    pub fn tag(&self) -> Option<&str> {
        match self {
            MarkupNode::Element { tag, .. } => Some(tag),
            MarkupNode::Text { .. } => None,
        }
    }

    /// Whether this node is an element with the given tag.
    pub fn is_element(&self, name: &str) -> bool {
        self.tag() == Some(name)
    }

    /// Flattened visible text of the subtree.
    ///
    /// Depth-first collection of every descendant text node, each trimmed,
    /// empties skipped, joined with single spaces. All inline markup degrades
    /// to plain text.
    pub fn flattened_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        match self {
            MarkupNode::Text { content } => {
                let trimmed = content.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            MarkupNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(parts);
                }
            }
        }
    }

    /// Every descendant element with the given tag, in document order.
    ///
    /// Searches the whole subtree, not just direct children, so ragged
    /// nesting (a list inside a list item, a row inside a tbody) is
    /// transparent to callers.
    pub fn find_all(&self, tag: &str) -> Vec<&MarkupNode> {
        let mut found = Vec::new();
        self.collect_tagged(tag, &mut found);
        found
    }

    fn collect_tagged<'a>(&'a self, tag: &str, found: &mut Vec<&'a MarkupNode>) {
        if let MarkupNode::Element { children, .. } = self {
            for child in children {
                if child.is_element(tag) {
                    found.push(child);
                }
                child.collect_tagged(tag, found);
            }
        }
    }
}
