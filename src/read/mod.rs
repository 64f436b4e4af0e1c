//! This module implements the parse orchestrator, the one entry point callers need.
//!
//! The flow is `classify -> {7z | raw gbak | unknown} -> scan -> attach samples -> done`.
//! Every path ends in a well-formed [`FirebirdParseResult`]; failures are
//! recorded as diagnostics, never raised.

#[cfg(feature = "async")]
mod asynchronous;
mod err;

#[cfg(feature = "async")]
pub use asynchronous::*;
pub use err::*;

use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, info, warn};

use crate::archive;
use crate::config::ParserConfig;
use crate::detect::{self, BackupFormat, MIN_BACKUP_SIZE};
use crate::fallback;
use crate::model::{sort_by_priority, FileInfo, FirebirdParseResult, ParseMode};
use crate::scan::{self, TableMarkers};

/// Distinct tables a raw backup must show before its estimates count as a full match.
pub const FULL_MATCH_TABLES: usize = 5;

/// How much structural evidence backs a result, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Evidence {
    None,
    /// A valid archive whose compressed payload hid every marker.
    ArchiveSizeOnly,
    /// Firebird markers present, but no known table.
    FormatMarkersOnly,
    PartialMatch,
    FullMatch,
}

impl Evidence {
    pub fn confidence(self) -> f64 {
        match self {
            Evidence::None => 0.0,
            Evidence::ArchiveSizeOnly => 0.3,
            Evidence::FormatMarkersOnly => 0.4,
            Evidence::PartialMatch => 0.6,
            Evidence::FullMatch => 0.8,
        }
    }

    /// Evidence carried by `tables` distinct tables found in a raw backup.
    pub fn for_raw_tables(tables: usize) -> Evidence {
        if tables >= FULL_MATCH_TABLES {
            return Evidence::FullMatch;
        }
        if tables > 0 {
            return Evidence::PartialMatch;
        }
        return Evidence::FormatMarkersOnly;
    }
}

/// A result with nothing learned yet.
pub(crate) fn blank_result(size_bytes: usize, file_name: Option<&str>) -> FirebirdParseResult {
    return FirebirdParseResult {
        success: false,
        parse_mode: ParseMode::StructuralEstimate,
        confidence: Evidence::None.confidence(),
        file_info: FileInfo {
            file_name: file_name.map(String::from),
            format: BackupFormat::Unknown,
            size_bytes: size_bytes as u64,
            is_valid_archive: false,
            contained_files: None,
            archive_version: None,
            start_header_crc_valid: None,
        },
        database_version: None,
        tables: Vec::new(),
        errors: Vec::new(),
    };
}

/// Parse a backup with the default configuration.
pub fn parse_backup(buf: &[u8], file_name: Option<&str>) -> FirebirdParseResult {
    return parse_backup_with(buf, file_name, &ParserConfig::default());
}

/// Parse a PostalMate backup, raw or inside a 7zip archive.
///
/// Never panics and never fails: the returned result always describes what
/// could be learned, and `errors` says why the numbers may be approximate.
pub fn parse_backup_with(
    buf: &[u8],
    file_name: Option<&str>,
    config: &ParserConfig,
) -> FirebirdParseResult {
    let mut parse = Parse {
        buf,
        config,
        result: blank_result(buf.len(), file_name),
    };

    if buf.len() < MIN_BACKUP_SIZE {
        parse.issue(ParseIssue::TooSmall { size: buf.len() });
        return parse.finish();
    }

    let format = detect::classify(buf, config.header_scan_bytes);
    debug!(%format, size = buf.len(), "classified backup");
    parse.result.file_info.format = format;

    match format {
        BackupFormat::SevenZip => parse.sevenz(),
        BackupFormat::RawFirebird => parse.raw_firebird(),
        BackupFormat::Unknown => {
            warn!("unrecognized backup format");
            parse.issue(ParseIssue::UnrecognizedFormat);
        }
    }
    return parse.finish();
}

/// In-flight state of one parse.
struct Parse<'a> {
    buf: &'a [u8],
    config: &'a ParserConfig,
    result: FirebirdParseResult,
}

impl<'a> Parse<'a> {
    fn issue(&mut self, issue: ParseIssue) {
        debug!(%issue, "parse issue");
        self.result.errors.push(issue.to_string());
    }

    fn sevenz(&mut self) {
        let info = archive::analyse_archive(self.buf);
        let file_info = &mut self.result.file_info;
        file_info.is_valid_archive = info.valid;
        file_info.archive_version = info.header_version.map(|v| v.to_string());
        file_info.start_header_crc_valid = info.start_header_crc_valid;
        file_info.contained_files = Some(info.contained_files.clone());

        if !info.valid {
            warn!("corrupt 7z archive header");
            self.issue(ParseIssue::CorruptArchiveHeader);
            return;
        }
        if !info.has_backup_file() {
            self.issue(ParseIssue::no_backup_file(&info.contained_files));
            return;
        }

        let markers = self.scan_markers();
        if markers.is_empty() {
            warn!("no table markers in archive, falling back to size-based estimates");
            self.size_fallback(Evidence::ArchiveSizeOnly);
            self.issue(ParseIssue::NoStructuralLandmarks { compressed: true });
            return;
        }
        self.accept_markers(&markers, Evidence::PartialMatch);
    }

    fn raw_firebird(&mut self) {
        self.result.file_info.is_valid_archive = true;

        let markers = self.scan_markers();
        if markers.is_empty() {
            warn!("firebird markers without known tables, falling back to size-based estimates");
            self.result.database_version =
                scan::probe_version(self.buf, self.config.version_scan_bytes);
            self.size_fallback(Evidence::FormatMarkersOnly);
            self.issue(ParseIssue::NoStructuralLandmarks { compressed: false });
            return;
        }
        self.accept_markers(&markers, Evidence::for_raw_tables(markers.len()));
    }

    fn scan_markers(&self) -> Vec<TableMarkers> {
        let window = match self.config.max_scan_bytes {
            Some(cap) => &self.buf[..self.buf.len().min(cap)],
            None => self.buf,
        };
        return scan::scan_markers(window);
    }

    fn accept_markers(&mut self, markers: &[TableMarkers], evidence: Evidence) {
        let mut tables = scan::tables_from_markers(markers, self.buf.len(), self.config);
        scan::attach_samples(self.buf, &mut tables, self.config);

        self.result.database_version =
            scan::probe_version(self.buf, self.config.version_scan_bytes);
        self.result.tables = tables;
        self.result.confidence = evidence.confidence();
        self.result.success = true;
    }

    fn size_fallback(&mut self, evidence: Evidence) {
        self.result.tables = fallback::size_based_estimates(self.buf.len() as u64, self.config);
        self.result.confidence = evidence.confidence();
        self.result.success = true;
    }

    fn finish(mut self) -> FirebirdParseResult {
        sort_by_priority(&mut self.result.tables);
        info!(
            format = %self.result.file_info.format,
            success = self.result.success,
            tables = self.result.tables.len(),
            confidence = self.result.confidence,
            "backup parsed"
        );
        return self.result;
    }
}
