//! tuxdoc: generate Lua API reference pages from annotated C source files.
//!
//! Native functions exposed to Lua are documented in comment blocks:
//!
//! ```c
//! /** lua function
//!  * @brief Adds two numbers.
//!  * @param n1 first number
//!  * @returns the sum
//!  * @usage int add(int n1, int n2)
//!  */
//! ```
//!
//! `tuxdoc <source> <output-dir> <title>` parses those blocks, converts each
//! one into `docs/<name>.html` through an external converter (`txt2web` by
//! default) and writes an `index.html` linking them.

mod convert;
mod model;
mod parser;
mod render;
mod site;
mod text;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "tuxdoc",
    version,
    about = "Generate Lua API reference pages from annotated C source files"
)]
struct Cli {
    /// C source file containing `lua function` documentation blocks
    source: PathBuf,

    /// Output directory. Deleted and recreated on every run.
    output: PathBuf,

    /// Project title shown on the index page
    title: String,

    /// Program converting a text artifact into HTML, run as `<program> <txt> <html>`
    #[arg(long, env = "TUXDOC_CONVERTER", default_value = convert::DEFAULT_PROGRAM)]
    converter: String,

    /// Stylesheet href used by index.html
    #[arg(long, default_value = "/style.css")]
    stylesheet: String,

    /// Page loaded into the content frame of index.html
    #[arg(long, default_value = "homepage.html")]
    home_page: String,

    /// Keep the intermediate .txt artifacts next to index.html
    #[arg(long)]
    keep_artifacts: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Argument errors print usage to stderr and still exit 0
            _ => {
                eprint!("{}", e);
                return Ok(());
            }
        },
    };

    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match verbose {
        0 => "tuxdoc=info",
        1 => "tuxdoc=debug",
        _ => "tuxdoc=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Parse before touching the output directory so a bad source leaves it alone
    let doc = parser::parse_file(&cli.source)?;
    tracing::info!(
        source = %cli.source.display(),
        functions = doc.functions.len(),
        "parsed documentation blocks"
    );

    reset_output_dir(&cli.output)?;

    let converter = convert::ProcessConverter::new(cli.converter.as_str());
    let mut options = site::SiteOptions::new(cli.title.as_str());
    options.stylesheet = cli.stylesheet.clone();
    options.home_page = cli.home_page.clone();
    options.keep_artifacts = cli.keep_artifacts;

    let pages = site::assemble(&doc, &cli.output, &converter, &options)?;
    tracing::info!(
        output = %cli.output.display(),
        converter = converter.program(),
        pages = pages.len(),
        "site generated"
    );
    Ok(())
}

/// Recursively delete `dir` if it exists, then create it empty.
fn reset_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove output directory: {}", dir.display()))?;
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    Ok(())
}
