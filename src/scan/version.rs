use alloc::string::String;
use memchr::memmem;

use crate::codec::{Codec, Windows1252};

/// Prefix of the banner line gbak writes, e.g. `gbak:WI-V2.5.9.27139`.
pub const VERSION_MARKER: &[u8] = b"gbak:";

const MAX_VERSION_LEN: usize = 200;

/// Read the gbak version banner if one starts within the first `scan_bytes` bytes.
pub fn probe_version(buf: &[u8], scan_bytes: usize) -> Option<String> {
    let window_len = buf.len().min(scan_bytes.saturating_add(VERSION_MARKER.len() - 1));
    let pos = memmem::find(&buf[..window_len], VERSION_MARKER)?;

    let limit = buf.len().min(pos + MAX_VERSION_LEN);
    let mut end = pos + VERSION_MARKER.len();
    while end < limit && buf[end] != b'\n' && buf[end] != 0 {
        end += 1;
    }
    let version = Windows1252::new().decode(&buf[pos..end]);
    let version = version.trim();
    if version.is_empty() {
        return None;
    }
    return Some(String::from(version));
}
