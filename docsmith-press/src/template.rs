//! Template loading
//!
//! A conversion can append onto an existing `.docx` instead of starting from
//! scratch. Templates are best-effort: a path that cannot be read or parsed
//! falls back to a fresh empty document, never to an error.

use std::path::Path;

use docx_rs::{read_docx, Docx};

/// The document a conversion appends onto
pub struct BaseDocument {
    /// The docx package being built on
    pub docx: Docx,
    /// Whether the base came from an existing template file
    pub from_template: bool,
}

impl BaseDocument {
    fn fresh() -> Self {
        BaseDocument {
            docx: Docx::new(),
            from_template: false,
        }
    }
}

/// Load the base document for a conversion
///
/// With no path, or with a path that is missing, unreadable or not a valid
/// docx package, the base is a fresh empty document.
pub fn load(template_path: Option<&Path>) -> BaseDocument {
    let Some(path) = template_path else {
        return BaseDocument::fresh();
    };

    match read_template(path) {
        Some(docx) => BaseDocument {
            docx,
            from_template: true,
        },
        None => BaseDocument::fresh(),
    }
}

fn read_template(path: &Path) -> Option<Docx> {
    let bytes = std::fs::read(path).ok()?;
    read_docx(&bytes).ok()
}
