use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Longest signature we look at.
const SIGNATURE_LEN: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Gzip,
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zip => f.write_str("zip"),
            Self::Gzip => f.write_str("gzip"),
        }
    }
}

pub fn detect_format(data: &[u8]) -> Option<ArchiveFormat> {
    match data {
        [0x50, 0x4B, 0x03, 0x04, ..] => Some(ArchiveFormat::Zip),
        [0x1F, 0x8B, ..] => Some(ArchiveFormat::Gzip),
        _ => None,
    }
}

/// Classify a file by its leading bytes.
///
/// Missing files, unreadable files and short reads are all "not an archive";
/// detection never fails.
pub fn detect_path(path: impl AsRef<Path>) -> Option<ArchiveFormat> {
    let file = File::open(path.as_ref()).ok()?;
    let mut header = Vec::with_capacity(SIGNATURE_LEN as usize);
    file.take(SIGNATURE_LEN).read_to_end(&mut header).ok()?;
    detect_format(&header)
}

pub fn is_zip(path: impl AsRef<Path>) -> bool {
    detect_path(path) == Some(ArchiveFormat::Zip)
}

pub fn is_gzip(path: impl AsRef<Path>) -> bool {
    detect_path(path) == Some(ArchiveFormat::Gzip)
}

pub fn is_supported_archive(path: impl AsRef<Path>) -> bool {
    detect_path(path).is_some()
}
