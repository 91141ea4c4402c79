//! Block model coverage for Markdown input.

use docsmith_press::{Block, Row, TableBlock};

use crate::common::md_blocks;
use crate::markdown::KITCHEN_SINK_BLOCKS;

#[test]
fn test_heading_levels() {
    let source = "# One\n\n## Two\n\n### Three\n\n#### Four\n\n##### Five\n\n###### Six\n";
    let blocks = md_blocks(source);

    let levels: Vec<usize> = blocks
        .iter()
        .map(|block| match block {
            Block::Heading { level, .. } => *level,
            other => panic!("expected heading, got {other:?}"),
        })
        .collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_paragraph_text_flattened() {
    let blocks = md_blocks("Some **bold** and *emphasized* text.\n");

    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            text: "Some bold and emphasized text.".to_string(),
        }]
    );
}

#[test]
fn test_strikethrough_flattened() {
    let blocks = md_blocks("~~gone~~ kept\n");

    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            text: "gone kept".to_string(),
        }]
    );
}

#[test]
fn test_paragraphs_keep_document_order() {
    let blocks = md_blocks("First.\n\nSecond.\n");

    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                text: "First.".to_string(),
            },
            Block::Paragraph {
                text: "Second.".to_string(),
            },
        ]
    );
}

#[test]
fn test_unordered_list_items() {
    let blocks = md_blocks("- apples\n- pears\n");

    assert_eq!(
        blocks,
        vec![
            Block::ListItem {
                text: "apples".to_string(),
                ordered: false,
            },
            Block::ListItem {
                text: "pears".to_string(),
                ordered: false,
            },
        ]
    );
}

#[test]
fn test_ordered_list_keeps_item_order() {
    let blocks = md_blocks("1. first\n2. second\n3. third\n");

    let texts: Vec<&str> = blocks
        .iter()
        .map(|block| match block {
            Block::ListItem { text, ordered: true } => text.as_str(),
            other => panic!("expected ordered item, got {other:?}"),
        })
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn test_kitchen_sink_block_sequence() {
    let expected = vec![
        Block::Heading {
            level: 1,
            text: "Report".to_string(),
        },
        Block::Paragraph {
            text: "Intro paragraph with bold text.".to_string(),
        },
        Block::Heading {
            level: 2,
            text: "Findings".to_string(),
        },
        Block::ListItem {
            text: "first finding".to_string(),
            ordered: false,
        },
        Block::ListItem {
            text: "second finding".to_string(),
            ordered: false,
        },
        Block::ListItem {
            text: "step one".to_string(),
            ordered: true,
        },
        Block::ListItem {
            text: "step two".to_string(),
            ordered: true,
        },
        Block::Table(TableBlock {
            rows: vec![
                Row {
                    cells: vec!["Name".to_string(), "Count".to_string()],
                },
                Row {
                    cells: vec!["foo".to_string(), "1".to_string()],
                },
                Row {
                    cells: vec!["bar".to_string(), "2".to_string()],
                },
            ],
        }),
        Block::Paragraph {
            text: "Closing remarks.".to_string(),
        },
    ];

    assert_eq!(*KITCHEN_SINK_BLOCKS, expected);
}
