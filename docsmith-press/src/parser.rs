//! Parser trait definition
//!
//! This module defines the seam between source text and the markup tree.
//! Anything that can turn a string into a vector of top-level [`MarkupNode`]s
//! can feed the conversion pipeline; the built-in Markdown and HTML parsers
//! are just the default implementations.

use crate::error::ConvertError;
use crate::tree::MarkupNode;

/// Trait for markup parsers
///
/// Implementors convert source text into the markup tree consumed by the
/// walker. Registered parsers are selected by name or detected from a file
/// extension.
///
/// # Examples
///
/// ```ignore
/// struct MyParser;
///
/// impl MarkupParser for MyParser {
///     fn name(&self) -> &str {
///         "my-markup"
///     }
///
///     fn file_extensions(&self) -> &[&str] {
///         &["mym"]
///     }
///
///     fn parse(&self, source: &str) -> Result<Vec<MarkupNode>, ConvertError> {
///         // Parse source into top-level markup nodes
///         todo!()
///     }
/// }
/// ```
pub trait MarkupParser: Send + Sync {
    /// The name of this parser (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this parser
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this parser (e.g., ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic parser detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Parse source text into the top-level nodes of a markup tree
    fn parse(&self, source: &str) -> Result<Vec<MarkupNode>, ConvertError>;
}
