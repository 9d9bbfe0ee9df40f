use std::process::ExitCode;

use barex_archive::{Extractor, TracingSink, tree};
use clap::Parser;

mod cli;
mod logging;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    if let Err(e) = logging::init(&args.log_file, args.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Opening: {}", args.path.display());
    if let Err(e) = cli::validate_input(&args.path) {
        tracing::error!("{e:#}");
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let extractor = Extractor::with_sink(TracingSink);
    match extractor.extract(&args.path) {
        Ok(report) => {
            tracing::info!(
                "Extracted {} archives ({} files, {} levels) into {}",
                report.archive_count(),
                report.total_files(),
                report.depth(),
                report.destination.display()
            );
            if !args.no_tree {
                tree::walk(&report.destination, extractor.sink());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Extraction failed: {e}");
            eprintln!("Extraction failed: {e}");
            ExitCode::FAILURE
        }
    }
}
