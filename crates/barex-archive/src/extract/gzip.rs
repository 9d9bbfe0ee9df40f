use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{Error, Result};
use crate::report::{Entry, ExtractReport};
use crate::sanitize::entry_path;
use crate::sink::{Event, Sink};

use super::{Extractor, create_destination, write_file};

/// Decompress a gzip stream into its single output file, then descend into
/// that file.
pub(super) fn extract<S: Sink>(extractor: &Extractor<S>, report: &mut ExtractReport) -> Result<()> {
    let source = report.source.clone();
    let destination = report.destination.clone();

    create_destination(&destination)?;

    let file = File::open(&source).map_err(|e| Error::ArchiveOpen {
        path: source.clone(),
        source: e,
    })?;
    let mut decoder = MultiGzDecoder::new(file);

    // The header is parsed eagerly, so a missing one means bad framing.
    if decoder.header().is_none() {
        let source_err = match decoder.read(&mut [0u8; 1]) {
            Err(e) => e,
            Ok(_) => io::Error::new(io::ErrorKind::InvalidData, "invalid gzip header"),
        };
        return Err(Error::GzipReader {
            path: source,
            source: source_err,
        });
    }

    let name = output_name(decoder.header().and_then(|h| h.filename()), &destination);
    let target = entry_path(&name, &destination)?;

    let bytes = write_file(&mut decoder, &target).map_err(|e| Error::EntryExtract {
        entry: name.clone(),
        path: target.clone(),
        source: e,
    })?;
    drop(decoder);

    extractor.sink().record(&Event::FileWritten {
        path: &target,
        bytes,
    });
    report.push(Entry::file(name, target.clone(), bytes));

    extractor.descend(&target, report)
}

/// Embedded original filename, else the destination directory's own name.
fn output_name(embedded: Option<&[u8]>, destination: &Path) -> String {
    match embedded {
        Some(raw) if !raw.is_empty() => String::from_utf8_lossy(raw).into_owned(),
        _ => destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_name_wins() {
        assert_eq!(
            output_name(Some(b"payload.zip"), Path::new("out/pkg")),
            "payload.zip"
        );
    }

    #[test]
    fn falls_back_to_destination_name() {
        assert_eq!(output_name(None, Path::new("out/pkg")), "pkg");
        assert_eq!(output_name(Some(b""), Path::new("out/pkg")), "pkg");
    }

    #[test]
    fn non_utf8_name_is_lossy() {
        assert_eq!(
            output_name(Some(&[b'a', 0xFF, b'b']), Path::new("out/pkg")),
            "a\u{FFFD}b"
        );
    }
}
