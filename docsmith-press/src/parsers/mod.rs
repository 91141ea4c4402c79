//! Parser implementations
//!
//! This module contains the built-in parsers that turn source text into
//! the markup tree consumed by the walker.

pub mod html;
pub mod markdown;

pub use html::HtmlParser;
pub use markdown::MarkdownParser;
