//! This module exposes the CRC algorithm used by 7zip.

use crc::*;

/// 7zip checksums with plain CRC-32 (the zlib/PNG one).
pub const CRC_32_7Z: Algorithm<u32> = CRC_32_ISO_HDLC;

pub fn sevenz_crc(input: &[u8]) -> u32 {
    let algo = Crc::<u32>::new(&CRC_32_7Z);
    let mut digest = algo.digest();
    digest.update(input);
    return digest.finalize();
}
