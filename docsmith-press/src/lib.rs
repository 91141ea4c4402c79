//! Markup to DOCX conversion
//!
//!     This crate converts Markdown or HTML documents into Word packages. The
//!     pipeline is deliberately linear: source text becomes a markup tree,
//!     the tree is flattened into a small block model, and the blocks are
//!     appended onto a docx package (optionally one loaded from a template).
//!
//! Architecture
//!
//!     Source text → markup tree → block model → docx package
//!
//!     Each stage only knows about the one before it. Parsers produce
//!     [`MarkupNode`] trees, the walker reduces trees to [`Block`]s, and the
//!     writer turns blocks into OOXML without ever seeing the tree. That
//!     keeps format-specific code at the edges and the document semantics in
//!     one place (the walker).
//!
//!     This is a pure lib: it powers the docsmith CLI but is shell agnostic,
//!     so no code here prints, reads env vars or assumes a terminal.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── parser.rs               # MarkupParser trait definition
//!     ├── registry.rs             # ParserRegistry for discovery and selection
//!     ├── parsers
//!     │   ├── markdown.rs         # Markdown → tree (comrak, through HTML)
//!     │   └── html.rs             # HTML → tree (html5ever)
//!     ├── tree.rs                 # MarkupNode and text flattening
//!     ├── blocks.rs               # The block model
//!     ├── walker.rs               # tree → blocks
//!     ├── table.rs                # table elements → rectangular grids
//!     ├── template.rs             # optional .docx base document
//!     ├── writer.rs               # blocks → package (docx-rs)
//!     ├── outline.rs              # blocks → plain text listing
//!     └── convert.rs              # the one-call pipeline
//!
//! The Block Model
//!
//!     The block model is intentionally small: headings, paragraphs, list
//!     items and tables, all carrying plain flattened text. Inline formatting
//!     does not survive the walker, nested lists are flattened to a single
//!     level, and ragged tables are squared off to the width of their first
//!     row. This matches what the writer expresses and keeps the walker a
//!     single pass with a closed set of cases.
//!
//! Library Choices
//!
//!     Parsing is offloaded to each format's own library: comrak renders
//!     Markdown and html5ever parses HTML, with Markdown routed through
//!     HTML so both inputs arrive as the same tree shape. docx-rs does all
//!     the OOXML lifting; this crate never writes XML by hand.
//!
//! Testing
//!
//!     Unit tests live next to the code they cover. Integration tests under
//!     tests/ are grouped by stage (markdown/, docx/); note that cargo does
//!     not discover tests in subdirectories by default, so tests/lib.rs
//!     declares them as modules.

pub mod blocks;
pub mod convert;
pub mod error;
pub mod outline;
pub mod parser;
pub mod parsers;
pub mod registry;
pub mod table;
pub mod template;
pub mod tree;
pub mod walker;
pub mod writer;

pub use blocks::{Block, Row, TableBlock};
pub use convert::{convert, ConvertArtifact, ConvertInput, ConvertResult, ConvertSpec};
pub use error::ConvertError;
pub use parser::MarkupParser;
pub use registry::ParserRegistry;
pub use tree::MarkupNode;
