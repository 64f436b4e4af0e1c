use alloc::vec::Vec;
use tracing::debug;

use super::TableMarkers;
use crate::config::ParserConfig;
use crate::model::{ByteRange, FirebirdTable};
use crate::schema;

/// The two independent record-count signals for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordEstimate {
    /// Region size divided by the assumed record width.
    pub by_size: u64,
    /// Marker hits, minus the one that is the table definition itself.
    pub by_position: u64,
}

impl RecordEstimate {
    /// The larger signal. Downstream treats counts as upper-bound expectations.
    pub fn value(&self) -> u64 {
        return self.by_size.max(self.by_position);
    }
}

/// Estimate the records of a table whose markers start a region of `region_size` bytes.
///
/// A record width that doesn't fit in `usize` gives no size signal at all.
pub fn estimate_record_count(
    column_count: usize,
    marker_count: usize,
    region_size: usize,
    bytes_per_column: usize,
) -> RecordEstimate {
    let by_size = match column_count.checked_mul(bytes_per_column) {
        Some(avg_bytes_per_record) if avg_bytes_per_record > 0 => {
            (region_size as f64 / avg_bytes_per_record as f64).round() as u64
        }
        _ => 0,
    };
    let by_position = marker_count.saturating_sub(1) as u64;
    return RecordEstimate {
        by_size,
        by_position,
    };
}

/// Turn ordered markers into tables.
///
/// Each table owns the bytes from its first marker up to the next table's
/// first marker, the last one up to `buf_len`. Markers without any position
/// are skipped.
pub fn tables_from_markers(
    markers: &[TableMarkers],
    buf_len: usize,
    config: &ParserConfig,
) -> Vec<FirebirdTable> {
    let located: Vec<(usize, &TableMarkers)> = markers
        .iter()
        .filter_map(|m| m.first().map(|start| (start, m)))
        .collect();

    let mut tables = Vec::with_capacity(located.len());
    for (i, (start, m)) in located.iter().enumerate() {
        let start = *start;
        let end = located.get(i + 1).map_or(buf_len, |(next, _)| *next).max(start);
        let range = ByteRange { start, end };

        let estimate = estimate_record_count(
            schema::columns(m.name).len(),
            m.positions.len(),
            range.len(),
            config.bytes_per_column,
        );
        debug!(
            table = m.name,
            start,
            end,
            by_size = estimate.by_size,
            by_position = estimate.by_position,
            "record estimate"
        );
        tables.push(FirebirdTable::new(m.name, estimate.value(), Some(range)));
    }
    return tables;
}
