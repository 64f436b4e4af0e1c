//! Size-based record estimates.
//!
//! Used when no table marker can be found at all. Every dictionary table is
//! scaled linearly from the reference backup by file size.

use alloc::vec::Vec;
use tracing::debug;

use crate::config::ParserConfig;
use crate::model::{sort_by_priority, FirebirdTable};
use crate::schema::TABLES;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Ratio of `size_bytes` to the reference backup size.
pub fn size_ratio(size_bytes: u64, config: &ParserConfig) -> f64 {
    return (size_bytes as f64 / BYTES_PER_MB) / config.reference_size_mb;
}

/// Extrapolate every dictionary table's row count from the file size.
/// The resulting tables carry no byte range.
pub fn size_based_estimates(size_bytes: u64, config: &ParserConfig) -> Vec<FirebirdTable> {
    let ratio = size_ratio(size_bytes, config);
    debug!(size_bytes, ratio, "size-based estimate");

    let mut tables: Vec<FirebirdTable> = TABLES
        .iter()
        .map(|t| {
            let count = (t.reference_count as f64 * ratio).round().max(0.0) as u64;
            FirebirdTable::new(t.token, count, None)
        })
        .collect();
    sort_by_priority(&mut tables);
    return tables;
}
