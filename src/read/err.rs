//! This module provides the diagnostics a parse can raise.
//!
//! None of these abort anything. Each one is rendered into the result's
//! `errors` list and the result's `success`/`confidence` reflect how bad it was.

use alloc::string::String;

/// Everything that can degrade or end a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIssue {
    #[error("File is too small to be a valid backup ({size} bytes).")]
    TooSmall { size: usize },
    #[error("7z archive header is corrupted or unrecognized.")]
    CorruptArchiveHeader,
    #[error(
        "Archive does not appear to contain a Firebird backup file (.fbk, .gbk, TMPBCK). Found files: {found}"
    )]
    NoBackupFileFound { found: String },
    #[error("{}", no_landmarks_message(.compressed))]
    NoStructuralLandmarks { compressed: bool },
    #[error(
        "File does not match 7z archive or Firebird backup format. Expected a PostalMate .7z backup or raw .fbk/.gbk file."
    )]
    UnrecognizedFormat,
    /// The blocking parse task never produced a result.
    #[error("Backup analysis was interrupted: {0}")]
    Interrupted(String),
}

fn no_landmarks_message(compressed: &bool) -> &'static str {
    if *compressed {
        return "Could not find table markers in compressed archive. Counts are estimated from file size. \
                Full extraction requires server-side 7z + gbak tools.";
    }
    return "Found Firebird markers but could not locate PostalMate table structures. \
            Counts are estimated from file size.";
}

impl ParseIssue {
    /// Build a [`ParseIssue::NoBackupFileFound`] listing whatever names were recovered.
    pub fn no_backup_file(found: &[String]) -> ParseIssue {
        let found = if found.is_empty() {
            String::from("none detected")
        } else {
            found.join(", ")
        };
        return ParseIssue::NoBackupFileFound { found };
    }
}
