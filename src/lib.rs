#![forbid(unsafe_code)]
//! A crate for estimating what a PostalMate Firebird backup contains
//! without restoring it.
//!
//! Backups arrive either as raw `gbak` streams or packed into a 7zip archive.
//! Neither is decoded: the parser scans raw bytes for landmarks (table names,
//! archive headers, printable field data) and reports table row-count
//! estimates together with a confidence score and the reasons the numbers
//! may be off.
//!
//! ```no_run
//! let bytes = std::fs::read("backup.7z").unwrap();
//! let result = fbkscan::parse_backup(&bytes, Some("backup.7z"));
//! for table in &result.tables {
//!     println!("{}: ~{}", table.label(), table.record_count);
//! }
//! ```

#![allow(clippy::needless_return)]

extern crate alloc;

pub mod archive;
pub mod codec;
pub mod config;
pub mod detect;
pub mod fallback;
pub mod model;
mod parser;
pub mod read;
pub mod scan;
pub mod schema;

pub use config::{ConfigError, ParserConfig};
pub use detect::BackupFormat;
pub use model::{
    ByteRange, FieldValue, FileInfo, FirebirdParseResult, FirebirdTable, ParseMode, SampleRecord,
};
pub use parser::ArchiveVersion;
pub use read::{parse_backup, parse_backup_with, Evidence, ParseIssue};
#[cfg(feature = "async")]
pub use read::parse_backup_async;
