use std::fs::File;
use std::io::{self, BufReader};

use crate::error::{Error, Result};
use crate::report::{Entry, ExtractReport};
use crate::sanitize::entry_path;
use crate::sink::{Event, Sink};

use super::{Extractor, create_destination, create_directory, write_file};

/// Unpack one zip level into `report.destination`, descending into each
/// written file before moving on to the next entry.
pub(super) fn extract<S: Sink>(extractor: &Extractor<S>, report: &mut ExtractReport) -> Result<()> {
    let source = report.source.clone();
    let destination = report.destination.clone();

    let open_failed = |source_err: io::Error| Error::ArchiveOpen {
        path: source.clone(),
        source: source_err,
    };
    let file = File::open(&source).map_err(open_failed)?;
    let mut archive = ::zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| open_failed(io::Error::from(e)))?;

    create_destination(&destination)?;

    for index in 0..archive.len() {
        // Resolve the name first so a stream that fails to open is still named.
        let name = archive.name_for_index(index).unwrap_or_default().to_owned();
        let target = entry_path(&name, &destination)?;

        let written = {
            let mut file = archive.by_index(index).map_err(|e| Error::EntryExtract {
                entry: name.clone(),
                path: target.clone(),
                source: io::Error::from(e),
            })?;
            let mode = file.unix_mode();

            if file.is_dir() {
                create_directory(&target, mode).map_err(|source| Error::EntryExtract {
                    entry: name.clone(),
                    path: target.clone(),
                    source,
                })?;
                extractor.sink().record(&Event::DirectoryCreated { path: &target });
                report.push(Entry::directory(name, target, mode));
                continue;
            }

            let bytes = write_file(&mut file, &target).map_err(|source| Error::EntryExtract {
                entry: name.clone(),
                path: target.clone(),
                source,
            })?;
            extractor.sink().record(&Event::FileWritten {
                path: &target,
                bytes,
            });
            report.push(Entry::file(name, target.clone(), bytes).with_mode(mode));
            target
        };

        extractor.descend(&written, report)?;
    }

    Ok(())
}
