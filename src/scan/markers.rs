use alloc::vec::Vec;
use aho_corasick::{AhoCorasick, BuildError, MatchKind};
use memchr::memmem;
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::schema::TABLES;

/// Every accepted occurrence of one dictionary token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMarkers {
    pub name: &'static str,
    /// Ascending and non-overlapping. Never empty when produced by a scan.
    pub positions: Vec<usize>,
}

impl TableMarkers {
    pub fn first(&self) -> Option<usize> {
        return self.positions.first().copied();
    }
}

/// One automaton over all dictionary tokens. Pattern ids are indices into `TABLES`.
static TOKEN_AUTOMATON: Lazy<Result<AhoCorasick, BuildError>> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::Standard)
        .build(TABLES.iter().map(|t| t.token))
});

/// A byte that may delimit a relation name in the record stream.
#[inline(always)]
pub fn is_boundary(b: u8) -> bool {
    return b <= 0x20;
}

/// Whether the match at `pos..pos + len` is delimited on at least one side.
/// Buffer edges count as delimiters.
#[inline]
fn on_token_boundary(buf: &[u8], pos: usize, len: usize) -> bool {
    let before = if pos > 0 { buf[pos - 1] } else { 0 };
    let after = buf.get(pos + len).copied().unwrap_or(0);
    return is_boundary(before) || is_boundary(after);
}

/// Find every dictionary token in `buf`, ordered by first occurrence.
///
/// All tokens are matched in a single pass. Per token, matches are taken
/// non-overlapping from the left and then filtered by the boundary rule;
/// tokens with no accepted match are left out.
pub fn scan_markers(buf: &[u8]) -> Vec<TableMarkers> {
    let ac = match &*TOKEN_AUTOMATON {
        Ok(ac) => ac,
        Err(e) => {
            warn!(error = %e, "token automaton unavailable, scanning per token");
            return scan_markers_by_token(buf);
        }
    };

    let mut positions: Vec<Vec<usize>> = TABLES.iter().map(|_| Vec::new()).collect();
    // First offset at which each token may match again.
    let mut resume_at: Vec<usize> = TABLES.iter().map(|_| 0).collect();

    for m in ac.find_overlapping_iter(buf) {
        let id = m.pattern().as_usize();
        if m.start() < resume_at[id] {
            continue;
        }
        resume_at[id] = m.end();
        if on_token_boundary(buf, m.start(), m.len()) {
            positions[id].push(m.start());
        }
    }

    return collect(positions);
}

/// Same result as [`scan_markers`], one `memmem` pass per token.
pub fn scan_markers_by_token(buf: &[u8]) -> Vec<TableMarkers> {
    let positions: Vec<Vec<usize>> = TABLES
        .iter()
        .map(|t| {
            let len = t.token.len();
            memmem::find_iter(buf, t.token.as_bytes())
                .filter(|pos| on_token_boundary(buf, *pos, len))
                .collect::<Vec<usize>>()
        })
        .collect();
    return collect(positions);
}

fn collect(positions: Vec<Vec<usize>>) -> Vec<TableMarkers> {
    let mut found: Vec<TableMarkers> = TABLES
        .iter()
        .zip(positions)
        .filter(|(_, p)| !p.is_empty())
        .map(|(t, positions)| TableMarkers {
            name: t.token,
            positions,
        })
        .collect();
    found.sort_by_key(|m| m.first());

    for m in found.iter() {
        debug!(table = m.name, hits = m.positions.len(), first = ?m.first(), "table marker");
    }
    return found;
}
