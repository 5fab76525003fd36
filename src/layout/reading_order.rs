//! Reading-order sorting for extracted fragments.
//!
//! The extraction layer emits fragments per page in discovery order, which
//! for multi-column or rotated content is not the order a human reads them
//! in. Sorting by page, then top edge, then left edge restores a natural
//! top-to-bottom, left-to-right sequence.

use crate::fragment::Fragment;
use crate::utils::safe_float_cmp;
use std::cmp::Ordering;

/// Sort fragments into reading order in place.
///
/// Fragments are ordered by page number, then by the top edge of their
/// bounding box, then by its left edge. The sort is stable, so fragments
/// with identical keys keep their relative input order, and sorting an
/// already-sorted sequence leaves it unchanged.
///
/// Fragments without a bounding box sort as if positioned at the top-left
/// corner of their page; a warning is logged when any are present.
///
/// # Examples
///
/// ```
/// use workorder_oxide::fragment::Fragment;
/// use workorder_oxide::geometry::Rect;
/// use workorder_oxide::layout::sort_fragments;
///
/// let mut fragments = vec![
///     Fragment::new(1, vec!["second".to_string()], Some(Rect::new(50.0, 200.0, 150.0, 215.0))),
///     Fragment::new(1, vec!["first".to_string()], Some(Rect::new(50.0, 100.0, 150.0, 115.0))),
/// ];
/// sort_fragments(&mut fragments);
/// assert_eq!(fragments[0].key_line(), "first");
/// ```
pub fn sort_fragments(fragments: &mut [Fragment]) {
    let unpositioned = fragments.iter().filter(|f| f.bbox.is_none()).count();
    if unpositioned > 0 {
        log::warn!(
            "{} of {} fragments have no position; sorting them to the top of their page",
            unpositioned,
            fragments.len()
        );
    }
    fragments.sort_by(compare_fragments);
}

/// Check whether a fragment sequence is already in reading order.
pub fn is_reading_order(fragments: &[Fragment]) -> bool {
    fragments
        .windows(2)
        .all(|pair| compare_fragments(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Total order over fragments: page, then top edge, then left edge.
fn compare_fragments(a: &Fragment, b: &Fragment) -> Ordering {
    let (a_top, a_left) = position_key(a);
    let (b_top, b_left) = position_key(b);
    a.page
        .cmp(&b.page)
        .then_with(|| safe_float_cmp(a_top, b_top))
        .then_with(|| safe_float_cmp(a_left, b_left))
}

/// Position key of a fragment; missing boxes collapse to the page origin.
fn position_key(fragment: &Fragment) -> (f32, f32) {
    match &fragment.bbox {
        Some(bbox) => (bbox.top(), bbox.left()),
        None => (0.0, 0.0),
    }
}
