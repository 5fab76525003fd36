//! Top-level section boundary detection.
//!
//! Reports open with a service-configurations section and continue with a
//! site-operations section; both are located by scanning key lines for
//! marker text. Markers match as substrings, so page furniture around a
//! marker (trailing page numbers, soft hyphens) does not defeat detection.

use crate::error::{Error, Result};
use crate::fragment::Fragment;

/// Half-open fragment index range covering one top-level section.
///
/// The range includes the fragment that matched the start marker and
/// excludes the fragment that matched the end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Index of the fragment whose key line matched the start marker.
    pub start: usize,
    /// One past the last fragment belonging to the section.
    pub end: usize,
}

impl SectionBounds {
    /// Borrow the fragments covered by these bounds.
    pub fn slice<'a>(&self, fragments: &'a [Fragment]) -> &'a [Fragment] {
        fragments.get(self.start..self.end).unwrap_or(&[])
    }

    /// Number of fragments in the section.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the section covers no fragments.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Find the first fragment at or after `from` whose key line contains `marker`.
///
/// Only the key line participates in matching; marker text buried in value
/// lines never starts a section.
pub fn find_fragment(fragments: &[Fragment], marker: &str, from: usize) -> Option<usize> {
    fragments
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, fragment)| fragment.key_line().contains(marker))
        .map(|(index, _)| index)
}

/// Locate the bounds of the section opened by `start_marker` and closed by
/// the next fragment matching `end_marker`.
///
/// A missing end marker closes the section at the end of the sequence;
/// reports routinely omit the footer sentinel. A missing start marker is an
/// [`Error::SectionNotFound`], and the caller decides the fallback.
///
/// # Examples
///
/// ```
/// use workorder_oxide::fragment::Fragment;
/// use workorder_oxide::layout::find_section_bounds;
///
/// let fragments = vec![
///     Fragment::new(1, vec!["Work Order Report".to_string()], None),
///     Fragment::new(1, vec!["Service Configurations".to_string()], None),
///     Fragment::new(1, vec!["Service ID:".to_string(), "SVC-1".to_string()], None),
///     Fragment::new(1, vec!["Site Operations".to_string()], None),
/// ];
/// let bounds = find_section_bounds(&fragments, "Service Configurations", "Site Operations")?;
/// assert_eq!((bounds.start, bounds.end), (1, 3));
/// # Ok::<(), workorder_oxide::error::Error>(())
/// ```
pub fn find_section_bounds(
    fragments: &[Fragment],
    start_marker: &str,
    end_marker: &str,
) -> Result<SectionBounds> {
    let start = find_fragment(fragments, start_marker, 0)
        .ok_or_else(|| Error::SectionNotFound(start_marker.to_string()))?;
    let end = find_fragment(fragments, end_marker, start + 1).unwrap_or(fragments.len());
    Ok(SectionBounds { start, end })
}
