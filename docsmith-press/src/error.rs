//! Error types for conversion operations

use std::fmt;

/// Errors that can abort a conversion.
///
/// Recoverable input conditions (missing template, empty table, ragged row,
/// unknown tag) are absorbed by the components that encounter them and never
/// reach this type. A conversion either returns a complete package or one of
/// these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Parser not found in registry
    ParserNotFound(String),
    /// Error during parsing
    Parse(String),
    /// Structurally invalid markup handed to the walker
    MalformedTree(String),
    /// The output package could not be persisted
    Write(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ParserNotFound(name) => write!(f, "Parser '{name}' not found"),
            ConvertError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::MalformedTree(msg) => write!(f, "Malformed markup tree: {msg}"),
            ConvertError::Write(msg) => write!(f, "Write error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
