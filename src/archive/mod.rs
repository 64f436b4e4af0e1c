//! Structural analysis of 7zip archives.
//!
//! Nothing here decompresses anything. The analyzer validates the signature
//! header and then scans the raw bytes for names of contained backups, which
//! only works when the names happen to sit in an uncompressed region.

mod names;
pub use names::*;

use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, warn};

use crate::detect::MIN_BACKUP_SIZE;
use crate::parser::{
    self, ArchiveVersion, HeaderError, HeaderErrorKind, SIGNATURE_HEADER_SIZE_BYTES,
};

/// What could be learned about an archive without unpacking it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveInfo {
    /// Magic matched and the buffer is large enough to hold a signature header.
    pub valid: bool,
    pub header_version: Option<ArchiveVersion>,
    /// `None` when the start header couldn't be read at all.
    pub start_header_crc_valid: Option<bool>,
    pub contained_files: Vec<String>,
}

impl ArchiveInfo {
    fn invalid() -> ArchiveInfo {
        return ArchiveInfo {
            valid: false,
            header_version: None,
            start_header_crc_valid: None,
            contained_files: Vec::new(),
        };
    }

    /// Whether any recovered name looks like a Firebird backup.
    pub fn has_backup_file(&self) -> bool {
        return self.contained_files.iter().any(|f| is_backup_file_name(f));
    }
}

/// Analyse a buffer that was classified as a 7zip archive.
pub fn analyse_archive(buf: &[u8]) -> ArchiveInfo {
    if buf.len() < MIN_BACKUP_SIZE || !parser::has_magic(buf) {
        return ArchiveInfo::invalid();
    }

    let header_version = match parser::archive_version(&buf[parser::MAGIC.len()..]) {
        Ok((_, v)) => Some(v),
        Err(_) => None,
    };
    let start_header_crc_valid = check_start_header(buf);
    let contained_files = scan_file_names(buf);
    debug!(
        version = ?header_version,
        crc_ok = ?start_header_crc_valid,
        files = contained_files.len(),
        "analysed 7z signature header"
    );

    return ArchiveInfo {
        valid: true,
        header_version,
        start_header_crc_valid,
        contained_files,
    };
}

/// Verify the start header CRC. Only used as a diagnostic.
fn check_start_header(buf: &[u8]) -> Option<bool> {
    let input = &buf[..buf.len().min(SIGNATURE_HEADER_SIZE_BYTES)];
    match parser::signature_header(input) {
        Ok((_, hdr)) => {
            debug!(
                next_header_offset = hdr.start_header.next_header_offset,
                next_header_size = hdr.start_header.next_header_size,
                next_header_crc = hdr.start_header.next_header_crc,
                "7z start header"
            );
            return Some(true);
        }
        Err(e) => {
            let e = HeaderError::from_nom(e, input);
            match e.kind {
                HeaderErrorKind::Crc(expected, got) => {
                    warn!(expected, got, "7z start header CRC mismatch");
                    return Some(false);
                }
                HeaderErrorKind::Nom(_, kind) => {
                    debug!(?kind, ctx = ?e.context(), "7z signature header unreadable");
                    return None;
                }
            }
        }
    }
}
