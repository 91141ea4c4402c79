//! DOCX writing (block model → OOXML package)
//!
//! The builder accumulates blocks and assembles the package exactly once.
//! Heading styles and list numbering definitions are only registered when
//! something in the document uses them, and only on a fresh base; a loaded
//! template keeps whatever styles it already carries.

use std::io::{Cursor, Write};
use std::path::Path;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, SpecialIndentType, Start, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::blocks::{Block, TableBlock};
use crate::error::ConvertError;
use crate::template::BaseDocument;

/// Numbering ids for list paragraphs
///
/// High fixed ids keep clear of any numbering a template brought along.
const BULLET_NUMBERING_ID: usize = 901;
const ORDERED_NUMBERING_ID: usize = 902;

/// Accumulates blocks and builds the final docx package
pub struct DocumentBuilder {
    base: BaseDocument,
    blocks: Vec<Block>,
}

impl DocumentBuilder {
    pub fn new(base: BaseDocument) -> Self {
        DocumentBuilder {
            base,
            blocks: Vec::new(),
        }
    }

    /// Append a single block
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append blocks in document order
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Assemble the document
    ///
    /// Consumes the builder; everything accumulated so far is appended onto
    /// the base in one pass.
    pub fn build(self) -> Docx {
        let has_bullets = self
            .blocks
            .iter()
            .any(|b| matches!(b, Block::ListItem { ordered: false, .. }));
        let has_numbers = self
            .blocks
            .iter()
            .any(|b| matches!(b, Block::ListItem { ordered: true, .. }));

        let mut docx = self.base.docx;
        if !self.base.from_template {
            docx = register_heading_styles(docx);
        }
        if has_bullets {
            docx = docx
                .add_abstract_numbering(bullet_numbering())
                .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));
        }
        if has_numbers {
            docx = docx
                .add_abstract_numbering(ordered_numbering())
                .add_numbering(Numbering::new(ORDERED_NUMBERING_ID, ORDERED_NUMBERING_ID));
        }

        for block in &self.blocks {
            docx = append_block(docx, block);
        }
        docx
    }

    /// Assemble the document and serialize it to package bytes
    pub fn to_bytes(self) -> Result<Vec<u8>, ConvertError> {
        package_bytes(self.build())
    }

    /// Assemble the document and write it atomically to `path`
    pub fn save(self, path: &Path) -> Result<(), ConvertError> {
        let bytes = self.to_bytes()?;
        write_package(path, &bytes)
    }
}

fn append_block(docx: Docx, block: &Block) -> Docx {
    match block {
        Block::Heading { level, text } => {
            let style_id = format!("Heading{level}");
            docx.add_paragraph(
                Paragraph::new()
                    .style(&style_id)
                    .add_run(Run::new().add_text(text.as_str())),
            )
        }
        Block::Paragraph { text } => {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text.as_str())))
        }
        Block::ListItem { text, ordered } => {
            let numbering_id = if *ordered {
                ORDERED_NUMBERING_ID
            } else {
                BULLET_NUMBERING_ID
            };
            docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(text.as_str()))
                    .numbering(NumberingId::new(numbering_id), IndentLevel::new(0)),
            )
        }
        Block::Table(table) => docx.add_table(build_docx_table(table)),
    }
}

fn build_docx_table(table: &TableBlock) -> Table {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    TableCell::new().add_paragraph(
                        Paragraph::new().add_run(Run::new().add_text(cell.as_str())),
                    )
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();
    Table::new(rows)
}

fn register_heading_styles(docx: Docx) -> Docx {
    let sizes = [32usize, 28, 26, 24, 22, 20];
    let mut docx = docx;
    for (index, size) in sizes.iter().enumerate() {
        let level = index + 1;
        docx = docx.add_style(
            Style::new(format!("Heading{level}"), StyleType::Paragraph)
                .name(format!("Heading {level}"))
                .size(*size)
                .bold(),
        );
    }
    docx
}

fn bullet_numbering() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
    )
}

fn ordered_numbering() -> AbstractNumbering {
    AbstractNumbering::new(ORDERED_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("decimal"),
            LevelText::new("%1."),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(420)), None, None),
    )
}

fn package_bytes(docx: Docx) -> Result<Vec<u8>, ConvertError> {
    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|e| ConvertError::Write(format!("failed to assemble docx package: {e}")))?;
    Ok(buffer)
}

/// Write package bytes to `path` atomically
///
/// The bytes go to a temporary file in the destination directory and are
/// persisted with a rename, so a failed write never leaves a partial
/// document at `path`.
pub fn write_package(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        ConvertError::Write(format!(
            "failed to create temporary file in {}: {e}",
            dir.display()
        ))
    })?;
    tmp.write_all(bytes)
        .map_err(|e| ConvertError::Write(format!("failed to write docx contents: {e}")))?;
    tmp.persist(path)
        .map_err(|e| ConvertError::Write(format!("failed to persist {}: {e}", path.display())))?;
    Ok(())
}
