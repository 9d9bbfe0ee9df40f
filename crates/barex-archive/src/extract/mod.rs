//! Recursive extraction of zip and gzip containers.
//!
//! Every archive is unpacked next to itself, into a directory named after the
//! archive with all extensions stripped. Each file written is checked by
//! signature and, when it is itself an archive, unpacked before the next
//! entry is processed. The first failure at any depth aborts every enclosing
//! level; output already on disk is left in place.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::detect::{self, ArchiveFormat};
use crate::error::{Error, Result};
use crate::report::ExtractReport;
use crate::sanitize::destination_for;
use crate::sink::{Event, Sink, TracingSink};

mod gzip;
mod zip;

#[cfg(unix)]
const DEFAULT_DIR_MODE: u32 = 0o755;

/// Unpack `path` and every archive nested inside it, logging through
/// `tracing`.
pub fn extract_recursive(path: impl AsRef<Path>) -> Result<ExtractReport> {
    Extractor::new().extract(path)
}

/// Recursive extractor reporting progress to a [`Sink`].
#[derive(Clone, Debug, Default)]
pub struct Extractor<S = TracingSink> {
    sink: S,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Sink> Extractor<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Extract one archive and everything nested inside it.
    ///
    /// `path` must start with a zip or gzip signature; anything else fails
    /// with [`Error::UnsupportedFormat`] before touching the filesystem.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<ExtractReport> {
        let path = path.as_ref();
        let format = detect::detect_path(path).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let destination = destination_for(path);
        self.sink.record(&Event::ArchiveStarted {
            path,
            format,
            destination: &destination,
        });

        let mut report = ExtractReport::new(path.to_path_buf(), format, destination);
        match format {
            ArchiveFormat::Zip => zip::extract(self, &mut report)?,
            ArchiveFormat::Gzip => gzip::extract(self, &mut report)?,
        }

        self.sink.record(&Event::ArchiveFinished {
            path,
            entries: report.entries.len(),
            bytes: report.total_bytes,
        });
        Ok(report)
    }

    /// Recurse into a freshly written file if it is an archive.
    fn descend(&self, written: &Path, report: &mut ExtractReport) -> Result<()> {
        if !detect::is_supported_archive(written) {
            return Ok(());
        }

        self.sink.record(&Event::NestedArchive { path: written });
        let nested = self
            .extract(written)
            .map_err(|e| Error::NestedExtract {
                path: written.to_path_buf(),
                source: Box::new(e),
            })?;
        report.nested.push(nested);
        Ok(())
    }
}

fn create_destination(destination: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DEFAULT_DIR_MODE);
    }
    builder
        .create(destination)
        .map_err(|source| Error::DestinationCreate {
            path: destination.to_path_buf(),
            source,
        })
}

/// Create a directory entry, honoring the permission bits the archive
/// recorded for it.
fn create_directory(path: &Path, _mode: Option<u32>) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        let mode = _mode
            .map(|m| m & 0o7777)
            .filter(|m| m & 0o777 != 0)
            .unwrap_or(DEFAULT_DIR_MODE);
        builder.mode(mode);
    }
    builder.create(path)
}

/// Copy `reader` into a new file at `target`, creating missing parents.
fn write_file<R: Read + ?Sized>(reader: &mut R, target: &Path) -> io::Result<u64> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut out = File::create(target)?;
    io::copy(reader, &mut out)
}
