//! Shared helpers for the integration tests.

use docsmith_press::parsers::markdown::parse_from_markdown;
use docsmith_press::walker::walk;
use docsmith_press::{convert, Block, ConvertArtifact, ConvertSpec};

/// Parse Markdown and reduce it to blocks
pub fn md_blocks(source: &str) -> Vec<Block> {
    let nodes = parse_from_markdown(source).expect("parse");
    walk(&nodes)
}

/// Convert Markdown to in-memory package bytes
pub fn md_package(source: &str) -> Vec<u8> {
    let result = convert(ConvertSpec::new(source)).expect("convert");
    match result.artifact {
        ConvertArtifact::InMemory(bytes) => bytes,
        ConvertArtifact::File(path) => panic!("unexpected file artifact at {}", path.display()),
    }
}

/// Convert Markdown and read the finished package back
pub fn md_docx(source: &str) -> docx_rs::Docx {
    docx_rs::read_docx(&md_package(source)).expect("readback")
}

/// Text of every top-level paragraph, in document order
pub fn paragraph_texts(docx: &docx_rs::Docx) -> Vec<String> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .collect()
}

/// Paragraph style ids, in document order (None for unstyled paragraphs)
pub fn paragraph_styles(docx: &docx_rs::Docx) -> Vec<Option<String>> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(p) => {
                Some(p.property.style.as_ref().map(|s| s.val.clone()))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_conversion_is_deterministic() {
    const SOURCE: &str = "# Title\n\nBody text.\n\n- one\n- two\n";

    assert_eq!(md_blocks(SOURCE), md_blocks(SOURCE));
    assert_eq!(
        docsmith_press::outline::render_outline(&md_blocks(SOURCE)),
        docsmith_press::outline::render_outline(&md_blocks(SOURCE))
    );
}
