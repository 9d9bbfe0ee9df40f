use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "barex", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Args {
    /// Archive to unpack (zip or gzip, detected by content)
    pub path: PathBuf,

    /// File that receives the extraction log
    #[arg(long, default_value = "bar-extract.log")]
    pub log_file: PathBuf,

    /// Skip printing the extracted tree
    #[arg(long)]
    pub no_tree: bool,

    /// Log every file and directory written
    #[arg(short, long)]
    pub verbose: bool,
}

/// Check the precondition the extractor relies on.
pub fn validate_input(path: &Path) -> Result<()> {
    std::fs::metadata(path).with_context(|| format!("cannot access {}", path.display()))?;
    if !barex_archive::is_supported_archive(path) {
        bail!("file {} is not zip/gzip", path.display());
    }
    Ok(())
}
