//! Markdown pipeline tests
//!
//! End-to-end coverage from Markdown source down to the block model.

use docsmith_press::Block;
use once_cell::sync::Lazy;

mod blocks;
mod table;

pub const KITCHEN_SINK: &str = "\
# Report

Intro paragraph with **bold** text.

## Findings

- first finding
- second finding

1. step one
2. step two

| Name | Count |
| ---- | ----- |
| foo  | 1     |
| bar  | 2     |

Closing remarks.
";

/// The kitchen sink document, parsed once and shared across tests
pub static KITCHEN_SINK_BLOCKS: Lazy<Vec<Block>> =
    Lazy::new(|| crate::common::md_blocks(KITCHEN_SINK));
