//! Tree walking (markup tree → block model)
//!
//! A single pass over the top-level nodes of the markup tree maps each one
//! to zero or more blocks. Nested structure never survives this step: list
//! items and table rows are pulled out of their subtrees, everything else is
//! flattened to visible text.

use crate::blocks::Block;
use crate::table::build_table;
use crate::tree::MarkupNode;

/// Walk the top-level nodes of a markup tree and produce document blocks
pub fn walk(nodes: &[MarkupNode]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for node in nodes {
        walk_node(node, &mut blocks);
    }
    blocks
}

fn walk_node(node: &MarkupNode, blocks: &mut Vec<Block>) {
    match node {
        MarkupNode::Text { content } => {
            let text = content.trim();
            if !text.is_empty() {
                blocks.push(Block::Paragraph {
                    text: text.to_string(),
                });
            }
        }
        MarkupNode::Element { tag, .. } => match tag.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag[1..].parse().unwrap_or(1);
                blocks.push(Block::Heading {
                    level,
                    text: node.flattened_text(),
                });
            }
            "p" => {
                // Emitted even when empty so blank paragraphs keep their
                // place in the document.
                blocks.push(Block::Paragraph {
                    text: node.flattened_text(),
                });
            }
            "ul" => collect_list_items(node, false, blocks),
            "ol" => collect_list_items(node, true, blocks),
            "table" => {
                if let Some(table) = build_table(node) {
                    blocks.push(Block::Table(table));
                }
            }
            // Unknown tags degrade to a plain paragraph of their visible text.
            _ => {
                let text = node.flattened_text();
                if !text.is_empty() {
                    blocks.push(Block::Paragraph { text });
                }
            }
        },
    }
}

fn collect_list_items(list: &MarkupNode, ordered: bool, blocks: &mut Vec<Block>) {
    for item in list.find_all("li") {
        blocks.push(Block::ListItem {
            text: item.flattened_text(),
            ordered,
        });
    }
}
