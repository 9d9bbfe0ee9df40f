//! Diagnostic output for extraction and tree walks.
//!
//! The extractor never logs directly. It reports [`Event`]s to whatever
//! [`Sink`] it was built with, so callers choose between the log, a
//! collector in tests, or nothing at all.

use std::io;
use std::path::Path;

use crate::detect::ArchiveFormat;

#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    ArchiveStarted {
        path: &'a Path,
        format: ArchiveFormat,
        destination: &'a Path,
    },
    DirectoryCreated {
        path: &'a Path,
    },
    FileWritten {
        path: &'a Path,
        bytes: u64,
    },
    NestedArchive {
        path: &'a Path,
    },
    ArchiveFinished {
        path: &'a Path,
        entries: usize,
        bytes: u64,
    },
    TreeNode {
        depth: usize,
        name: &'a str,
        is_dir: bool,
    },
    TreeUnreadable {
        depth: usize,
        path: &'a Path,
        error: &'a io::Error,
    },
}

pub trait Sink {
    fn record(&self, event: &Event<'_>);
}

impl<F> Sink for F
where
    F: Fn(&Event<'_>),
{
    fn record(&self, event: &Event<'_>) {
        self(event)
    }
}

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn record(&self, event: &Event<'_>) {
        match *event {
            Event::ArchiveStarted {
                path,
                format,
                destination,
            } => tracing::info!(
                "Extracting {format} archive: {} -> {}",
                path.display(),
                destination.display()
            ),
            Event::DirectoryCreated { path } => {
                tracing::debug!("Created directory: {}", path.display())
            }
            Event::FileWritten { path, bytes } => {
                tracing::debug!("Wrote {bytes} bytes: {}", path.display())
            }
            Event::NestedArchive { path } => {
                tracing::info!("Found nested archive: {}", path.display())
            }
            Event::ArchiveFinished {
                path,
                entries,
                bytes,
            } => tracing::debug!(
                "Finished {}: {entries} entries, {bytes} bytes",
                path.display()
            ),
            Event::TreeNode { depth, name, is_dir } => {
                let suffix = if is_dir { "/" } else { "" };
                tracing::info!("{:indent$}{name}{suffix}", "", indent = depth * 2)
            }
            Event::TreeUnreadable { depth, path, error } => tracing::warn!(
                "{:indent$}[error reading dir {}: {error}]",
                "",
                path.display(),
                indent = depth * 2
            ),
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn record(&self, _event: &Event<'_>) {}
}
