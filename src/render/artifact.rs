//! Per-function text artifact fed to the HTML converter.
//!
//! Layout: a `-----` metadata header, the `# Function` heading, the fenced
//! prototype, brief and description, then `## Parameters` and `## Returns`.

use super::file_stem;
use crate::model::FunctionDoc;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the intermediate artifact files.
pub const EXTENSION: &str = "txt";

/// Render one function as artifact text.
pub fn render(func: &FunctionDoc) -> String {
    let name = func.name.as_deref().unwrap_or_default();
    let mut lines: Vec<String> = Vec::new();

    // Metadata header; only the title is known
    lines.push("-----".to_string());
    lines.push(format!("title: {}", name));
    lines.push("date: ".to_string());
    lines.push("description: ".to_string());
    lines.push("tags: ".to_string());
    lines.push("-----".to_string());

    lines.push(format!("# Function {}", name));
    lines.push("```".to_string());
    lines.push(func.prototype.clone().unwrap_or_default());
    lines.push("```".to_string());
    lines.push(func.brief.clone().unwrap_or_default());
    lines.push(String::new());

    if let Some(ref desc) = func.description {
        lines.push(desc.clone());
    }

    lines.push("## Parameters".to_string());
    for param in &func.params {
        lines.push(format!("- {}", param));
        lines.push(String::new());
    }

    lines.push("## Returns".to_string());
    lines.push(func.returns.clone().unwrap_or_default());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Path of the artifact for `name` inside `dir`.
pub fn path_for(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", file_stem(name), EXTENSION))
}

/// Write the artifact for `func` into `dir` and return its path.
///
/// The record must have a name (i.e. carried a `@usage` tag).
pub fn write(func: &FunctionDoc, dir: &Path) -> Result<PathBuf> {
    let name = func
        .name
        .as_deref()
        .context("cannot write an artifact for a function without @usage")?;
    let path = path_for(dir, name);
    tracing::info!(file = %path.display(), "creating text artifact");
    fs::write(&path, render(func))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
