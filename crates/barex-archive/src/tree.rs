//! Depth-first listing of an extracted directory, reported through a sink.

use std::fs;
use std::path::Path;

use crate::sink::{Event, Sink};

/// Walk `root`, emitting a [`Event::TreeNode`] for every entry.
///
/// Children are visited in name order. A directory that cannot be read is
/// reported as [`Event::TreeUnreadable`] and skipped.
pub fn walk<S: Sink + ?Sized>(root: impl AsRef<Path>, sink: &S) {
    walk_dir(root.as_ref(), 0, sink);
}

fn walk_dir<S: Sink + ?Sized>(dir: &Path, depth: usize, sink: &S) {
    let mut children = match fs::read_dir(dir).and_then(|rd| rd.collect::<Result<Vec<_>, _>>()) {
        Ok(children) => children,
        Err(error) => {
            sink.record(&Event::TreeUnreadable {
                depth,
                path: dir,
                error: &error,
            });
            return;
        }
    };
    children.sort_by_key(|child| child.file_name());

    for child in children {
        let name = child.file_name();
        let is_dir = child.file_type().is_ok_and(|t| t.is_dir());
        sink.record(&Event::TreeNode {
            depth,
            name: &name.to_string_lossy(),
            is_dir,
        });
        if is_dir {
            walk_dir(&child.path(), depth + 1, sink);
        }
    }
}
