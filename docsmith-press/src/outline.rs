//! Outline rendering (block model → plain text)
//!
//! A line-per-block text rendering of the block model, used by the CLI to
//! show what a conversion would write without producing a package. Table
//! rows are indented under their table line.

use crate::blocks::Block;

/// Render blocks as a plain-text outline, one block per line
pub fn render_outline(blocks: &[Block]) -> String {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                lines.push(format!("heading[{level}]: {text}"));
            }
            Block::Paragraph { text } => {
                if text.is_empty() {
                    lines.push("paragraph:".to_string());
                } else {
                    lines.push(format!("paragraph: {text}"));
                }
            }
            Block::ListItem { text, ordered } => {
                let marker = if *ordered { "number" } else { "bullet" };
                lines.push(format!("item[{marker}]: {text}"));
            }
            Block::Table(table) => {
                lines.push(format!("table[{}x{}]:", table.rows.len(), table.width()));
                for row in &table.rows {
                    lines.push(format!("  | {} |", row.cells.join(" | ")));
                }
            }
        }
    }
    lines.join("\n")
}
