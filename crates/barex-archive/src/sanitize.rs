use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Directory an archive is unpacked into: the archive path with every
/// trailing extension removed (`pkg.tar.gz` -> `pkg`).
/// A leading dot is part of the stem, so `.hidden` stays `.hidden` and
/// `dir/.cfg.gz` becomes `dir/.cfg`.
pub fn destination_for(archive: impl AsRef<Path>) -> PathBuf {
    let mut base = archive.as_ref().to_path_buf();
    while base.extension().is_some() {
        base.set_extension("");
    }
    base
}

/// Map an archive entry name onto a path under `destination`.
///
/// `..` may only climb back out of directories the entry itself descended
/// into; absolute names and anything escaping `destination` are rejected.
pub fn entry_path(entry: &str, destination: &Path) -> Result<PathBuf> {
    let unsafe_entry = || Error::UnsafeEntryPath {
        entry: entry.to_owned(),
        destination: destination.to_path_buf(),
    };

    let mut relative = PathBuf::new();
    for component in Path::new(&entry.replace('\\', "/")).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return Err(unsafe_entry());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(unsafe_entry()),
        }
    }

    Ok(destination.join(relative))
}
