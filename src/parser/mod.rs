//! Parser module: reads a source file and runs the block parser over it.

pub mod block;

use crate::model::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Fatal conditions inside a documentation block. Both abort the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An interior block line without the `*` continuation marker.
    #[error("line {line}: no `*` continuation marker inside documentation block: {text}")]
    MissingContinuation { line: usize, text: String },

    /// An `@` token that is not one of the recognized tags.
    #[error("line {line}: unknown tag `{tag}`")]
    UnknownTag { line: usize, tag: String },
}

/// Read and parse a source file into a Document.
pub fn parse_file(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    // Non-UTF-8 bytes (e.g. Latin-1 comments) are replaced, not rejected
    let content = String::from_utf8_lossy(&bytes);
    let doc = block::parse(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        functions = doc.functions.len(),
        "parsed source file"
    );
    Ok(doc)
}
