//! Repeating-record boundary detection.
//!
//! The site-operations section is a flat run of fragments in which each
//! record starts at a fragment whose key line carries the record marker.
//! Grouping slices the run at those boundaries; every fragment from the
//! first boundary onward belongs to exactly one record.

use crate::fragment::Fragment;

/// One repeating record's title and fragment span.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup {
    /// Display title taken from the boundary fragment's second line, or a
    /// positional fallback when that line is absent or blank.
    pub title: String,
    /// All fragments of this record, boundary fragment first.
    pub fragments: Vec<Fragment>,
}

/// Slice a fragment run into repeating records.
///
/// A record starts at each fragment whose key line contains
/// `record_marker` and extends to the fragment before the next boundary
/// (or the end of the run for the last record). Fragments before the first
/// boundary belong to no record. Records keep their document order, and
/// duplicate titles are preserved as separate entries.
///
/// Returns an empty vector when no boundary is found; the caller decides
/// how loudly to report that.
pub fn group_records(fragments: &[Fragment], record_marker: &str) -> Vec<RecordGroup> {
    let boundaries: Vec<usize> = fragments
        .iter()
        .enumerate()
        .filter(|(_, fragment)| fragment.key_line().contains(record_marker))
        .map(|(index, _)| index)
        .collect();

    let mut groups = Vec::with_capacity(boundaries.len());
    for (ordinal, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(ordinal + 1).copied().unwrap_or(fragments.len());
        let span = &fragments[start..end];
        groups.push(RecordGroup {
            title: derive_title(span.first(), ordinal),
            fragments: span.to_vec(),
        });
    }
    groups
}

/// Title of a record: the boundary fragment's second line, trimmed.
///
/// Records whose boundary fragment has no usable second line are titled
/// by position, `"Flexibility Point 1"` for the first record and so on.
fn derive_title(boundary: Option<&Fragment>, ordinal: usize) -> String {
    let designated = boundary
        .and_then(|fragment| fragment.lines.get(1))
        .map(|line| line.trim())
        .unwrap_or("");
    if designated.is_empty() {
        format!("Flexibility Point {}", ordinal + 1)
    } else {
        designated.to_string()
    }
}
