//! Table extraction (table element → rectangular grid)
//!
//! Markup tables arrive ragged: header rows, short rows, rows with stray
//! extra cells. The block model wants a rectangle, so the first row fixes
//! the column count and every other row is padded or truncated to match.

use crate::blocks::{Row, TableBlock};
use crate::tree::MarkupNode;

/// Build a rectangular table block from a `table` element
///
/// The column count comes from the first `tr`. Returns `None` when the
/// element contains no rows, or when the first row has no cells; neither
/// produces a usable grid.
pub fn build_table(node: &MarkupNode) -> Option<TableBlock> {
    let rows = node.find_all("tr");
    let width = collect_cells(rows.first()?).len();
    if width == 0 {
        return None;
    }

    let rows = rows
        .iter()
        .map(|row| normalize_row(row, width))
        .collect();

    Some(TableBlock { rows })
}

fn normalize_row(row: &MarkupNode, width: usize) -> Row {
    let mut cells: Vec<String> = collect_cells(row)
        .into_iter()
        .take(width)
        .map(|cell| cell.flattened_text())
        .collect();
    cells.resize(width, String::new());
    Row { cells }
}

/// Collect the `th` and `td` descendants of a row in document order
fn collect_cells<'a>(row: &'a MarkupNode) -> Vec<&'a MarkupNode> {
    let mut cells = Vec::new();
    collect_cells_into(row, &mut cells);
    cells
}

fn collect_cells_into<'a>(node: &'a MarkupNode, cells: &mut Vec<&'a MarkupNode>) {
    if let MarkupNode::Element { children, .. } = node {
        for child in children {
            if child.is_element("th") || child.is_element("td") {
                cells.push(child);
            }
            collect_cells_into(child, cells);
        }
    }
}
