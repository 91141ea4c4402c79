//! Document conversion pipeline.
//!
//! Provides a high-level API for converting markup sources to docx packages.
//! This module ties the stages together: parser selection, tree walking,
//! template loading, and package writing.
//!
//! Use this for callers that want a single function call from source text to
//! a finished `.docx`. For more control over the individual stages, use
//! [`ParserRegistry`], [`crate::walker::walk`] and
//! [`crate::writer::DocumentBuilder`] directly.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::registry::ParserRegistry;
use crate::template;
use crate::tree::MarkupNode;
use crate::walker;
use crate::writer::DocumentBuilder;

/// The input to a conversion.
#[derive(Debug, Clone, Copy)]
pub enum ConvertInput<'a> {
    /// Source text to run through a registered parser.
    Source(&'a str),
    /// An already-parsed markup tree.
    Tree(&'a [MarkupNode]),
}

/// Specifies how to convert a document.
///
/// Use the builder pattern to configure the conversion:
///
/// ```ignore
/// let spec = ConvertSpec::new("# Title\n\nBody text.\n")
///     .with_template("letterhead.docx")
///     .with_output_path("output.docx");
/// ```
///
/// If no output path is provided, the packaged bytes are returned in memory.
#[derive(Debug)]
pub struct ConvertSpec<'a> {
    /// The input to convert.
    pub input: ConvertInput<'a>,
    /// Parser name used for source input (e.g., "markdown", "html").
    pub parser: &'a str,
    /// Optional template the converted blocks are appended onto.
    pub template: Option<PathBuf>,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
}

impl<'a> ConvertSpec<'a> {
    /// Creates a new conversion specification for Markdown source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            input: ConvertInput::Source(source),
            parser: "markdown",
            template: None,
            output: None,
        }
    }

    /// Creates a conversion specification for an already-parsed markup tree.
    pub fn from_tree(nodes: &'a [MarkupNode]) -> Self {
        Self {
            input: ConvertInput::Tree(nodes),
            parser: "markdown",
            template: None,
            output: None,
        }
    }

    /// Selects the parser used for source input.
    pub fn with_parser(mut self, parser: &'a str) -> Self {
        self.parser = parser;
        self
    }

    /// Sets the template the conversion appends onto.
    pub fn with_template(mut self, path: impl AsRef<Path>) -> Self {
        self.template = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output file path. If provided, the package is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

/// The output from a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertArtifact {
    /// Package bytes held in memory (when no output path was specified).
    InMemory(Vec<u8>),
    /// Path to the written file (when an output path was specified).
    File(PathBuf),
}

/// Result of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertResult {
    /// The converted artifact (in-memory bytes or file path).
    pub artifact: ConvertArtifact,
}

/// Converts a markup document to a docx package according to the specification.
///
/// Uses the default parser registry for source input. The template, when
/// given, is loaded best-effort: a missing or invalid template file falls
/// back to a fresh empty document rather than failing the conversion.
///
/// # Errors
///
/// Returns [`ConvertError`] if:
/// - The named parser is not registered
/// - Parsing fails or the parsed document is structurally malformed
/// - The package cannot be assembled or written
pub fn convert(spec: ConvertSpec<'_>) -> Result<ConvertResult, ConvertError> {
    let blocks = match spec.input {
        ConvertInput::Source(source) => {
            let registry = ParserRegistry::with_defaults();
            let nodes = registry.parse(spec.parser, source)?;
            walker::walk(&nodes)
        }
        ConvertInput::Tree(nodes) => walker::walk(nodes),
    };

    let base = template::load(spec.template.as_deref());
    let mut builder = DocumentBuilder::new(base);
    builder.extend(blocks);

    match spec.output {
        Some(path) => {
            builder.save(&path)?;
            Ok(ConvertResult {
                artifact: ConvertArtifact::File(path),
            })
        }
        None => {
            let bytes = builder.to_bytes()?;
            Ok(ConvertResult {
                artifact: ConvertArtifact::InMemory(bytes),
            })
        }
    }
}
