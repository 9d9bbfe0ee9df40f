//! Recursive extraction of nested zip and gzip packages.
//!
//! # Architecture
//!
//! - `detect.rs` - Format detection by content signature
//! - `sanitize.rs` - Destination naming and entry path mapping
//! - `extract/` - Recursive driver and per-format single-level extractors
//! - `report.rs` - Extraction outcome
//! - `sink.rs` - Injected diagnostic sink
//! - `tree.rs` - Directory tree walk for diagnostics

pub use detect::{ArchiveFormat, is_gzip, is_supported_archive, is_zip};
pub use error::{Error, Result};
pub use extract::{Extractor, extract_recursive};
pub use report::{Entry, EntryKind, ExtractReport};
pub use sanitize::destination_for;
pub use sink::{Event, NullSink, Sink, TracingSink};

pub mod detect;
mod error;
pub mod extract;
mod report;
mod sanitize;
pub mod sink;
pub mod tree;
