use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{path}' is not a zip or gzip archive")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to open archive '{path}': {source}")]
    ArchiveOpen { path: PathBuf, source: io::Error },

    #[error("failed to create gzip reader for '{path}': {source}")]
    GzipReader { path: PathBuf, source: io::Error },

    #[error("failed to create destination directory '{path}': {source}")]
    DestinationCreate { path: PathBuf, source: io::Error },

    #[error("failed to extract entry '{entry}' to '{path}': {source}")]
    EntryExtract {
        entry: String,
        path: PathBuf,
        source: io::Error,
    },

    #[error("zip-slip attack detected: entry '{entry}' escapes '{destination}'")]
    UnsafeEntryPath { entry: String, destination: PathBuf },

    #[error("failed to recursively extract '{path}': {source}")]
    NestedExtract { path: PathBuf, source: Box<Error> },
}

impl Error {
    /// Innermost error of a `NestedExtract` chain.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::NestedExtract { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Nested archive paths from the outermost to the innermost level.
    pub fn nesting_path(&self) -> Vec<&PathBuf> {
        let mut paths = Vec::new();
        let mut current = self;
        while let Self::NestedExtract { path, source } = current {
            paths.push(path);
            current = &**source;
        }
        paths
    }
}

pub type Result<T> = std::result::Result<T, Error>;
