use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::{Codec, Windows1252};
use crate::config::ParserConfig;
use crate::model::{ByteRange, FieldValue, FirebirdTable, SampleRecord, RAW_SAMPLE_KEY};

#[inline(always)]
fn is_printable(b: u8) -> bool {
    return (0x20..0x7F).contains(&b);
}

/// Whether a printable run looks like field data rather than structure:
/// an email, an id-like digit run, or free text.
pub fn looks_like_field_data(text: &str) -> bool {
    if text.contains('@') || text.chars().count() > 20 {
        return true;
    }
    let mut digits = 0;
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits += 1;
            if digits >= 3 {
                return true;
            }
        } else {
            digits = 0;
        }
    }
    return false;
}

/// Pull a few readable fragments out of the start of a table's region.
/// Preview only, never used for counting.
pub fn extract_samples(buf: &[u8], range: ByteRange, config: &ParserConfig) -> Vec<SampleRecord> {
    let mut samples = Vec::new();
    let end = range
        .end
        .min(buf.len())
        .min(range.start.saturating_add(config.sample_window_bytes));
    if range.start >= end {
        return samples;
    }
    let window = &buf[range.start..end];
    let codec = Windows1252::new();

    let mut i = 0;
    while i < window.len() && samples.len() < config.max_samples {
        if !is_printable(window[i]) {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < window.len() && is_printable(window[i]) {
            i += 1;
        }
        if i - run_start < config.min_sample_run {
            continue;
        }
        let text = codec.decode(&window[run_start..i]);
        if looks_like_field_data(&text) {
            let clipped: String = text.chars().take(config.max_sample_chars).collect();
            let mut record = SampleRecord::new();
            record.insert(String::from(RAW_SAMPLE_KEY), FieldValue::Text(clipped));
            samples.push(record);
        }
    }
    return samples;
}

/// Attach samples to every table that has a byte range.
#[cfg(not(feature = "parallel"))]
pub fn attach_samples(buf: &[u8], tables: &mut [FirebirdTable], config: &ParserConfig) {
    for table in tables.iter_mut() {
        if let Some(range) = table.byte_range {
            table.sample_records = extract_samples(buf, range, config);
        }
    }
}

/// Attach samples to every table that has a byte range.
#[cfg(feature = "parallel")]
pub fn attach_samples(buf: &[u8], tables: &mut [FirebirdTable], config: &ParserConfig) {
    use rayon::prelude::*;

    tables.par_iter_mut().for_each(|table| {
        if let Some(range) = table.byte_range {
            table.sample_records = extract_samples(buf, range, config);
        }
    });
}
