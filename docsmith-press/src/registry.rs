//! Parser registry

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConvertError;
use crate::parser::MarkupParser;
use crate::parsers::{HtmlParser, MarkdownParser};
use crate::tree::MarkupNode;

/// Registry of available markup parsers
///
/// Parsers are registered by name. The registry also supports detection
/// from filename extensions, which is what the CLI uses when no parser
/// is named explicitly.
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn MarkupParser>>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ParserRegistry {
            parsers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in parsers registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MarkdownParser));
        registry.register(Box::new(HtmlParser));
        registry
    }

    /// Register a parser under its own name
    pub fn register(&mut self, parser: Box<dyn MarkupParser>) {
        self.parsers.insert(parser.name().to_string(), parser);
    }

    /// Look up a parser by name
    pub fn get(&self, name: &str) -> Option<&dyn MarkupParser> {
        self.parsers.get(name).map(|p| p.as_ref())
    }

    /// Check whether a parser is registered
    pub fn has(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// List the names of all registered parsers, sorted alphabetically
    pub fn list_parsers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parsers.keys().map(|n| n.as_str()).collect();
        names.sort();
        names
    }

    /// Detect a parser from a filename extension
    ///
    /// Matching is case-insensitive. Returns `None` when the filename has no
    /// extension or no registered parser claims it.
    pub fn detect_parser_from_filename(&self, filename: &str) -> Option<&dyn MarkupParser> {
        let extension = Path::new(filename).extension()?.to_str()?.to_lowercase();
        self.parsers
            .values()
            .find(|p| p.file_extensions().contains(&extension.as_str()))
            .map(|p| p.as_ref())
    }

    /// Parse source text with the named parser
    pub fn parse(&self, parser_name: &str, source: &str) -> Result<Vec<MarkupNode>, ConvertError> {
        let parser = self
            .get(parser_name)
            .ok_or_else(|| ConvertError::ParserNotFound(parser_name.to_string()))?;
        parser.parse(source)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
