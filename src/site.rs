//! Site assembly: artifact → converter → HTML page, then the index.

use crate::convert::Converter;
use crate::model::Document;
use crate::render::{self, artifact, index};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory holding one HTML page per function.
pub const DOCS_DIR: &str = "docs";

/// Name of the generated index page.
pub const INDEX_FILE: &str = "index.html";

/// Settings for the generated site.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Project title shown on the index page
    pub title: String,
    /// Stylesheet href used by the index page
    pub stylesheet: String,
    /// Page initially loaded into the content frame
    pub home_page: String,
    /// Leave the intermediate text artifacts on disk
    pub keep_artifacts: bool,
}

impl SiteOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: "/style.css".to_string(),
            home_page: "homepage.html".to_string(),
            keep_artifacts: false,
        }
    }
}

/// Build the site for `doc` inside `out_dir`.
///
/// Records are handled one at a time in list order; each converter run
/// finishes before the next artifact is written. Returns the generated
/// HTML page paths.
pub fn assemble(
    doc: &Document,
    out_dir: &Path,
    converter: &dyn Converter,
    options: &SiteOptions,
) -> Result<Vec<PathBuf>> {
    let docs_dir = out_dir.join(DOCS_DIR);
    fs::create_dir_all(&docs_dir)
        .with_context(|| format!("failed to create {}", docs_dir.display()))?;

    let mut names: Vec<&str> = Vec::new();
    let mut pages = Vec::new();

    for func in &doc.functions {
        let Some(name) = func.name.as_deref() else {
            tracing::warn!(brief = ?func.brief, "skipping documentation block without @usage");
            continue;
        };

        let txt = artifact::write(func, out_dir)?;
        let page = docs_dir.join(format!("{}.html", render::file_stem(name)));
        converter
            .convert(&txt, &page)
            .with_context(|| format!("failed to convert documentation for `{}`", name))?;
        tracing::info!(page = %page.display(), "generated page");

        if !options.keep_artifacts {
            fs::remove_file(&txt)
                .with_context(|| format!("failed to remove {}", txt.display()))?;
        }

        names.push(name);
        pages.push(page);
    }

    let index_path = out_dir.join(INDEX_FILE);
    let html = index::render(
        &options.title,
        &names,
        &options.stylesheet,
        &options.home_page,
    );
    fs::write(&index_path, html)
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    tracing::info!(file = %index_path.display(), functions = names.len(), "wrote index");

    Ok(pages)
}
