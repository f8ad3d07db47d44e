//! External text-to-HTML converter.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Program used when `--converter` is not given.
pub const DEFAULT_PROGRAM: &str = "txt2web";

/// Turns a text artifact into an HTML page.
pub trait Converter {
    fn convert(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// Runs `<program> <src> <dst>` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct ProcessConverter {
    program: String,
}

impl ProcessConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ProcessConverter {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Converter for ProcessConverter {
    fn convert(&self, src: &Path, dst: &Path) -> Result<()> {
        tracing::debug!(
            program = %self.program,
            src = %src.display(),
            dst = %dst.display(),
            "running converter"
        );
        let status = Command::new(&self.program)
            .arg(src)
            .arg(dst)
            .stdin(Stdio::null())
            .status()
            .with_context(|| format!("failed to run converter `{}`", self.program))?;
        if !status.success() {
            bail!(
                "converter `{}` failed on {} ({})",
                self.program,
                src.display(),
                status
            );
        }
        Ok(())
    }
}
