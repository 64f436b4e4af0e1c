use alloc::string::String;
use alloc::vec::Vec;
use memchr::memmem;
use widestring::U16Str;

/// Name fragments that identify a PostalMate backup inside an archive.
/// `TMPBCK` is the extension-less name PostalMate's own backup job uses.
pub const BACKUP_NAME_PATTERNS: [&str; 5] = [".fbk", ".gbk", ".fdb", "TMPBCK", "tmpbck"];

const ASCII_LOOKBACK: usize = 100;
const WIDE_LOOKBACK: usize = 200;
const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 99;

#[inline(always)]
fn is_printable(b: u8) -> bool {
    return (0x20..0x7F).contains(&b);
}

/// Recover plausible file names ending in one of [`BACKUP_NAME_PATTERNS`].
///
/// Names are looked for as plain ASCII first, then as UTF-16LE (how 7zip
/// stores them in its header). Order of first discovery is kept; duplicates are dropped.
pub fn scan_file_names(buf: &[u8]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for pat in BACKUP_NAME_PATTERNS.iter() {
        for pos in memmem::find_iter(buf, pat.as_bytes()) {
            let name = ascii_name_ending_at(buf, pos, pat.len());
            push_unique(&mut found, name);
        }
    }

    for pat in BACKUP_NAME_PATTERNS.iter() {
        let wide: Vec<u8> = pat.bytes().flat_map(|b| [b, 0]).collect();
        for pos in memmem::find_iter(buf, &wide) {
            let name = wide_name_ending_at(buf, pos, wide.len());
            push_unique(&mut found, name);
        }
    }

    return found;
}

/// Whether `name` looks like a Firebird backup or database file.
pub fn is_backup_file_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    return lower.ends_with(".fbk")
        || lower.ends_with(".gbk")
        || lower.ends_with(".fdb")
        || lower.contains("tmpbck");
}

fn ascii_name_ending_at(buf: &[u8], pos: usize, pat_len: usize) -> String {
    let mut start = pos;
    while start > 0 && is_printable(buf[start - 1]) {
        start -= 1;
        if pos - start > ASCII_LOOKBACK {
            break;
        }
    }
    let raw = &buf[start..pos + pat_len];
    // Every byte in `raw` is printable ASCII, so this is lossless.
    return String::from_utf8_lossy(raw).trim().into();
}

fn wide_name_ending_at(buf: &[u8], pos: usize, pat_len: usize) -> String {
    let mut start = pos;
    while start > 1 && buf[start - 1] == 0 && is_printable(buf[start - 2]) {
        start -= 2;
        if pos - start > WIDE_LOOKBACK {
            break;
        }
    }
    let units: Vec<u16> = buf[start..pos + pat_len]
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .filter(|u| *u != 0)
        .collect();
    return U16Str::from_slice(&units).to_string_lossy().trim().into();
}

fn push_unique(found: &mut Vec<String>, name: String) {
    let len = name.chars().count();
    if len < MIN_NAME_LEN || len > MAX_NAME_LEN {
        return;
    }
    if !found.contains(&name) {
        found.push(name);
    }
}
