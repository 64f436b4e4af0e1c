//! Custom nom parsers for the 7z signature header

use super::crc;
use super::err::*;
use super::types::*;

use nom::bytes::complete::{tag, take};
use nom::error::context;
use nom::number::complete::{le_u32, le_u64, u8};

/// Error type that all parsers return.
pub type HeaderResult<'a, T> = nom::IResult<&'a [u8], T, HeaderError<&'a [u8]>>;

pub fn magic(input: &[u8]) -> HeaderResult<&[u8]> {
    return context("magic bytes", tag(MAGIC))(input);
}

pub fn archive_version(input: &[u8]) -> HeaderResult<ArchiveVersion> {
    let (input, major) = context("archive_version major", u8)(input)?;
    let (input, minor) = context("archive_version minor", u8)(input)?;
    return Ok((input, ArchiveVersion { major, minor }));
}

pub fn start_header(input: &[u8]) -> HeaderResult<StartHeader> {
    let (input, next_header_offset) = context("start_header next_header_offset", le_u64)(input)?;
    let (input, next_header_size) = context("start_header next_header_size", le_u64)(input)?;
    let (input, next_header_crc) = context("start_header next_header_crc", le_u32)(input)?;
    return Ok((
        input,
        StartHeader {
            next_header_offset,
            next_header_size,
            next_header_crc,
        },
    ));
}

/// Parse the 32-byte signature header and check the start header against its stored CRC.
///
/// A CRC mismatch is a `Failure`: the bytes were all there, they just don't agree.
pub fn signature_header(input: &[u8]) -> HeaderResult<SignatureHeader> {
    let (input, _) = context("signature_header magic", magic)(input)?;
    let (input, version) = context("signature_header archive_version", archive_version)(input)?;
    let (input, stored_crc) = context("signature_header stored_crc", le_u32)(input)?;
    let (rest, raw) = context(
        "signature_header raw_start_header",
        take(START_HEADER_SIZE_BYTES),
    )(input)?;

    let computed_crc = start_header_crc(raw);
    if computed_crc != stored_crc {
        return Err(nom::Err::Failure(HeaderError::new(HeaderErrorKind::Crc(
            stored_crc,
            computed_crc,
        ))));
    }
    let (_, parsed) = context("signature_header start_header", start_header)(raw)?;

    return Ok((
        rest,
        SignatureHeader {
            archive_version: version,
            start_header_crc: stored_crc,
            start_header: parsed,
        },
    ));
}

/// Whether `input` begins with the 7zip magic bytes.
pub fn has_magic(input: &[u8]) -> bool {
    return magic(input).is_ok();
}

/// Compute the start header CRC as 7zip would store it.
///
/// `raw_start_header` must be the 20 bytes following the stored CRC.
pub fn start_header_crc(raw_start_header: &[u8]) -> u32 {
    return crc::sevenz_crc(raw_start_header);
}
