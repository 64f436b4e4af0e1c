//! Backup format detection.
//!
//! # Invariants
//! - Detection only looks at buffer contents, never at file names.
//! - The 7zip magic wins over any Firebird marker.
//!
//! # Algorithm
//! - Match the 6-byte 7zip magic at offset 0.
//! - Otherwise look for `gbak` in the header window, then for the
//!   `RDB$RELATION_NAME` system column anywhere in the buffer.

use memchr::memmem;
use serde::{Deserialize, Serialize};

use crate::parser;

/// Smallest buffer worth looking at. Also the size of a bare 7zip signature header.
pub const MIN_BACKUP_SIZE: usize = 32;

/// Banner gbak writes near the start of every backup.
pub const GBAK_MARKER: &[u8] = b"gbak";

/// System column present in every relation definition record.
pub const RELATION_NAME_MARKER: &[u8] = b"RDB$RELATION_NAME";

/// Container format of an uploaded backup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackupFormat {
    #[serde(rename = "7z")]
    SevenZip,
    #[serde(rename = "fbk")]
    RawFirebird,
    #[serde(rename = "unknown")]
    Unknown,
}

impl BackupFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            BackupFormat::SevenZip => "7z",
            BackupFormat::RawFirebird => "fbk",
            BackupFormat::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for BackupFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        return f.write_str(self.as_str());
    }
}

/// Classify `buf`.
///
/// Callers are expected to reject buffers shorter than [`MIN_BACKUP_SIZE`]
/// first; shorter input is still classified, just not meaningfully.
pub fn classify(buf: &[u8], header_scan_bytes: usize) -> BackupFormat {
    if parser::has_magic(buf) {
        return BackupFormat::SevenZip;
    }
    if has_firebird_markers(buf, header_scan_bytes) {
        return BackupFormat::RawFirebird;
    }
    return BackupFormat::Unknown;
}

/// Whether `buf` carries either Firebird backup landmark.
pub fn has_firebird_markers(buf: &[u8], header_scan_bytes: usize) -> bool {
    let header = &buf[..buf.len().min(header_scan_bytes)];
    if memmem::find(header, GBAK_MARKER).is_some() {
        return true;
    }
    return memmem::find(buf, RELATION_NAME_MARKER).is_some();
}
