use super::Codec;

use alloc::string::String;

/// Substitutions for the 0x80..=0x9F block, the only place where
/// Windows-1252 differs from ISO-8859-1.
///
/// 0x81, 0x8D, 0x8F, 0x90 and 0x9D are undefined and pass through.
const HIGH_CONTROL_MAP: [(u8, char); 27] = [
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

/// The single-byte codepage PostalMate stores its strings in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows1252 {}

impl Windows1252 {
    /// Creates a new `Windows1252` codec.
    /// The codec is stateless, this ctor only exists for uniformity.
    pub fn new() -> Windows1252 {
        return Windows1252 {};
    }

    /// Map a single byte to its Unicode scalar value.
    pub fn decode_byte(b: u8) -> char {
        if (0x80..=0x9F).contains(&b) {
            if let Some((_, c)) = HIGH_CONTROL_MAP.iter().find(|(k, _)| *k == b) {
                return *c;
            }
        }
        return char::from(b);
    }
}

impl Codec for Windows1252 {
    fn decode(&self, data: &[u8]) -> String {
        return data.iter().map(|b| Windows1252::decode_byte(*b)).collect();
    }
}
