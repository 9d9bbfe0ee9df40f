use std::path::PathBuf;

use crate::detect::ArchiveFormat;

/// An entry written to disk during extraction.
#[derive(Clone, Debug)]
pub struct Entry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub size: u64,
    pub mode: Option<u32>,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(original_path: impl Into<PathBuf>, target_path: PathBuf, size: u64) -> Self {
        Self {
            original_path: original_path.into(),
            target_path,
            size,
            mode: None,
            kind: EntryKind::File,
        }
    }

    pub fn directory(
        original_path: impl Into<PathBuf>,
        target_path: PathBuf,
        mode: Option<u32>,
    ) -> Self {
        Self {
            original_path: original_path.into(),
            target_path,
            size: 0,
            mode,
            kind: EntryKind::Directory,
        }
    }

    pub fn with_mode(mut self, mode: Option<u32>) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Outcome of extracting one archive, with one child report per nested
/// archive that was unwrapped from its output.
#[derive(Clone, Debug)]
pub struct ExtractReport {
    pub source: PathBuf,
    pub format: ArchiveFormat,
    pub destination: PathBuf,
    pub entries: Vec<Entry>,
    pub total_bytes: u64,
    pub nested: Vec<ExtractReport>,
}

impl ExtractReport {
    pub(crate) fn new(source: PathBuf, format: ArchiveFormat, destination: PathBuf) -> Self {
        Self {
            source,
            format,
            destination,
            entries: Vec::new(),
            total_bytes: 0,
            nested: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.total_bytes += entry.size;
        self.entries.push(entry);
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_file()).count()
    }

    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    /// Archives processed, this one included.
    pub fn archive_count(&self) -> usize {
        1 + self.nested.iter().map(Self::archive_count).sum::<usize>()
    }

    /// Files written at every level.
    pub fn total_files(&self) -> usize {
        self.file_count() + self.nested.iter().map(Self::total_files).sum::<usize>()
    }

    /// Levels of archive nesting, 1 when nothing nested was found.
    pub fn depth(&self) -> usize {
        1 + self.nested.iter().map(Self::depth).max().unwrap_or(0)
    }
}
