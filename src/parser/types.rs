//! Structures that make up the 7zip signature header.
//! These mirror how data is stored in the archive.

use serde::{Deserialize, Serialize};

/// Header magic bytes
pub const MAGIC: [u8; 6] = [b'7', b'z', 0xBC, 0xAF, 0x27, 0x1C];

pub const START_HEADER_SIZE_BYTES: usize = 8 + 8 + 4;

/// Magic, version, start header CRC and the start header itself.
pub const SIGNATURE_HEADER_SIZE_BYTES: usize = 6 + 2 + 4 + START_HEADER_SIZE_BYTES;

#[derive(Debug, Clone, PartialEq)]
pub struct StartHeader {
    pub next_header_offset: u64,
    pub next_header_size: u64,
    pub next_header_crc: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveVersion {
    pub major: u8,
    pub minor: u8,
}

impl core::fmt::Display for ArchiveVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        return write!(f, "{}.{}", self.major, self.minor);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignatureHeader {
    pub archive_version: ArchiveVersion,
    pub start_header_crc: u32,
    pub start_header: StartHeader,
}
