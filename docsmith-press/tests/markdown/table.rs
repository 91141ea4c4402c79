//! Table extraction through the Markdown pipeline.

use docsmith_press::{Block, Row, TableBlock};

use crate::common::md_blocks;

fn cells(texts: &[&str]) -> Row {
    Row {
        cells: texts.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn test_pipe_table() {
    let blocks = md_blocks("| Name | Age |\n| --- | --- |\n| Ada | 36 |\n");

    assert_eq!(
        blocks,
        vec![Block::Table(TableBlock {
            rows: vec![cells(&["Name", "Age"]), cells(&["Ada", "36"])],
        })]
    );
}

#[test]
fn test_header_only_table() {
    let blocks = md_blocks("| A | B |\n| - | - |\n");

    assert_eq!(
        blocks,
        vec![Block::Table(TableBlock {
            rows: vec![cells(&["A", "B"])],
        })]
    );
}

#[test]
fn test_ragged_html_rows_normalized() {
    // Raw HTML is the only way to feed a ragged table through Markdown;
    // pipe tables are already rectangular by the time comrak is done.
    let source = "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td></tr><tr><td>e</td><td>f</td></tr></table>\n";
    let blocks = md_blocks(source);

    assert_eq!(
        blocks,
        vec![Block::Table(TableBlock {
            rows: vec![
                cells(&["a", "b", "c"]),
                cells(&["d", "", ""]),
                cells(&["e", "f", ""]),
            ],
        })]
    );
}

#[test]
fn test_empty_html_row_padded_to_first_row_width() {
    let source = "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr></tr><tr><td>d</td></tr></table>\n";
    let blocks = md_blocks(source);

    assert_eq!(
        blocks,
        vec![Block::Table(TableBlock {
            rows: vec![
                cells(&["a", "b", "c"]),
                cells(&["", "", ""]),
                cells(&["d", "", ""]),
            ],
        })]
    );
}

#[test]
fn test_extra_cells_truncated_to_first_row_width() {
    let source = "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td><td>e</td><td>f</td></tr></table>\n";
    let blocks = md_blocks(source);

    assert_eq!(
        blocks,
        vec![Block::Table(TableBlock {
            rows: vec![cells(&["a", "b"]), cells(&["c", "d"])],
        })]
    );
}

#[test]
fn test_table_keeps_its_place_between_paragraphs() {
    let source = "Before.\n\n| X |\n| - |\n| 1 |\n\nAfter.\n";
    let blocks = md_blocks(source);

    assert_eq!(blocks.len(), 3);
    assert!(matches!(&blocks[0], Block::Paragraph { text } if text == "Before."));
    assert!(matches!(&blocks[1], Block::Table(t) if t.width() == 1));
    assert!(matches!(&blocks[2], Block::Paragraph { text } if text == "After."));
}
