//! This module contains decoders for the legacy text encodings
//! found inside Firebird backups.

mod windows1252;
pub use windows1252::*;

use alloc::string::String;

/// The main interface trait for other code to use.
///
/// All codecs must implement it.
pub trait Codec {
    /// Take the given byte run and decode it into text.
    ///
    /// Decoding never fails: bytes without a mapping are passed through as
    /// their raw code point, so the output always has one `char` per input byte.
    fn decode(&self, data: &[u8]) -> String;
}
