//! The parse result handed back to callers.
//!
//! Serializes to the camelCase JSON shape the upload screen consumes.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::detect::BackupFormat;
use crate::schema;

/// One loosely-typed field value of a sample record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

pub type SampleRecord = BTreeMap<String, FieldValue>;

/// Key under which the sample extractor stores its raw text fragment.
pub const RAW_SAMPLE_KEY: &str = "_raw_sample";

/// Half-open region `[start, end)` of the source buffer attributed to one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn len(&self) -> usize {
        return self.end - self.start;
    }

    pub fn is_empty(&self) -> bool {
        return self.end <= self.start;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebirdTable {
    pub name: String,
    pub record_count: u64,
    pub columns: Vec<String>,
    pub sample_records: Vec<SampleRecord>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub byte_range: Option<ByteRange>,
}

impl FirebirdTable {
    /// A table as known from the dictionary, with no samples yet.
    pub fn new(name: &str, record_count: u64, byte_range: Option<ByteRange>) -> FirebirdTable {
        return FirebirdTable {
            name: String::from(name),
            record_count,
            columns: schema::columns(name).iter().map(|c| String::from(*c)).collect(),
            sample_records: Vec::new(),
            byte_range,
        };
    }

    /// Display label from the schema dictionary, falling back to the raw name.
    pub fn label(&self) -> &str {
        return schema::lookup(&self.name).map_or(self.name.as_str(), |t| t.label);
    }

    pub fn priority(&self) -> u32 {
        return schema::priority(&self.name);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Counts come from decoding every record. Never produced by this crate.
    Full,
    StructuralEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_name: Option<String>,
    pub format: BackupFormat,
    pub size_bytes: u64,
    pub is_valid_archive: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contained_files: Option<Vec<String>>,
    /// "major.minor" from the 7zip signature header.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub archive_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_header_crc_valid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebirdParseResult {
    pub success: bool,
    pub parse_mode: ParseMode,
    /// 0..=1, how much structural evidence backs the counts.
    pub confidence: f64,
    pub file_info: FileInfo,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub database_version: Option<String>,
    /// Sorted by migration priority.
    pub tables: Vec<FirebirdTable>,
    /// Diagnostics in the order they were raised.
    pub errors: Vec<String>,
}

impl FirebirdParseResult {
    /// Sum of all estimated record counts.
    pub fn total_records(&self) -> u64 {
        return self.tables.iter().map(|t| t.record_count).sum();
    }

    pub fn table(&self, name: &str) -> Option<&FirebirdTable> {
        return self.tables.iter().find(|t| t.name == name);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        return serde_json::to_string(self);
    }
}

/// Stable sort by migration priority; tables sharing a priority keep their order.
pub fn sort_by_priority(tables: &mut [FirebirdTable]) {
    tables.sort_by_key(|t| t.priority());
}
