//! Readback assertions on written packages.

use docsmith_press::{convert, ConvertError, ConvertSpec};
use docx_rs::{DocumentChild, TableCellContent, TableChild, TableRowChild};

use crate::common::{md_docx, paragraph_styles, paragraph_texts};

fn numbering_ids(docx: &docx_rs::Docx) -> Vec<Option<usize>> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(
                p.property
                    .numbering_property
                    .as_ref()
                    .and_then(|n| n.id.as_ref())
                    .map(|id| id.id),
            ),
            _ => None,
        })
        .collect()
}

fn table_cell_texts(table: &docx_rs::Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|row| {
            let TableChild::TableRow(row) = row;
            row.cells
                .iter()
                .map(|cell| {
                    let TableRowChild::TableCell(cell) = cell;
                    cell.children
                        .iter()
                        .filter_map(|content| match content {
                            TableCellContent::Paragraph(p) => Some(p.raw_text()),
                            _ => None,
                        })
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_heading_gets_heading_style() {
    let docx = md_docx("## Section title\n");

    assert_eq!(paragraph_texts(&docx), vec!["Section title"]);
    assert_eq!(paragraph_styles(&docx), vec![Some("Heading2".to_string())]);
}

#[test]
fn test_plain_paragraph_is_unstyled() {
    let docx = md_docx("Just a paragraph.\n");

    assert_eq!(paragraph_texts(&docx), vec!["Just a paragraph."]);
    assert_eq!(paragraph_styles(&docx), vec![None]);
}

#[test]
fn test_empty_paragraph_kept_in_package() {
    // Raw HTML is the only Markdown route to an empty paragraph block.
    let docx = md_docx("before\n\n<p></p>\n\nafter\n");

    assert_eq!(paragraph_texts(&docx), vec!["before", "", "after"]);
}

#[test]
fn test_heading_styles_registered_for_fresh_documents() {
    let docx = md_docx("# Top\n");

    let ids: Vec<String> = docx
        .styles
        .styles
        .iter()
        .map(|s| s.style_id.clone())
        .collect();
    for level in 1..=6 {
        assert!(
            ids.contains(&format!("Heading{level}")),
            "missing style for level {level}"
        );
    }
}

#[test]
fn test_list_items_are_numbered() {
    let docx = md_docx("- a\n- b\n");

    let ids = numbering_ids(&docx);
    assert_eq!(ids.len(), 2);
    assert!(ids[0].is_some());
    assert_eq!(ids[0], ids[1]);
}

#[test]
fn test_bullet_and_ordered_numbering_differ() {
    let docx = md_docx("- bullet\n\n1. number\n");

    let ids = numbering_ids(&docx);
    assert_eq!(ids.len(), 2);
    assert!(ids[0].is_some());
    assert!(ids[1].is_some());
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_ordinary_paragraphs_are_not_numbered() {
    let docx = md_docx("No list here.\n");

    assert_eq!(numbering_ids(&docx), vec![None]);
}

#[test]
fn test_table_cells_survive_roundtrip() {
    let docx = md_docx("| A | B |\n| - | - |\n| 1 | 2 |\n");

    let tables: Vec<_> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Table(t) => Some(t),
            _ => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    assert_eq!(
        table_cell_texts(tables[0]),
        vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ]
    );
}

#[test]
fn test_document_child_order_matches_source() {
    let docx = md_docx("# H\n\nPara.\n\n| X |\n| - |\n");

    let kinds: Vec<&str> = docx
        .document
        .children
        .iter()
        .map(|child| match child {
            DocumentChild::Paragraph(_) => "paragraph",
            DocumentChild::Table(_) => "table",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["paragraph", "paragraph", "table"]);
}

#[test]
fn test_write_failure_reports_error_and_leaves_nothing() {
    let path = std::path::Path::new("/no-such-docsmith-dir/report.docx");
    let result = convert(ConvertSpec::new("# H\n").with_output_path(path));

    assert!(matches!(result, Err(ConvertError::Write(_))));
    assert!(!path.exists());
}
