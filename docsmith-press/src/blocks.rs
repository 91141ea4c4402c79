//! The normalized block model.
//!
//! An ordered sequence of [`Block`]s is everything the document writer needs
//! to know about a conversion: the walker reduces arbitrary markup to this
//! form, and nothing after the walker ever looks at markup again. Pure data,
//! no behavior beyond a couple of accessors.

use serde::Serialize;

/// One unit of normalized document content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A heading at level 1..=6.
    Heading { level: usize, text: String },
    /// A body paragraph. Empty text is a legitimate value and still renders
    /// as an (empty) paragraph.
    Paragraph { text: String },
    /// A single list entry; `ordered` selects numbered vs. bullet rendering.
    ListItem { text: String, ordered: bool },
    /// A rectangular table grid.
    Table(TableBlock),
}

/// A table normalized to a rectangular grid.
///
/// Every row holds exactly as many cells as the first (header) row; the
/// builder enforces this before the block is constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBlock {
    pub rows: Vec<Row>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub cells: Vec<String>,
}

impl TableBlock {
    /// Column count, as fixed by the header row.
    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.cells.len()).unwrap_or(0)
    }
}
