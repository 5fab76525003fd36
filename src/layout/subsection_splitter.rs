//! Indentation-based subsection splitting within one record.
//!
//! Inside a record, subsection headers ("Add equipment", "Splice", ...)
//! are printed as single indented lines, while field fragments are either
//! multi-line or flush with the left margin. A fragment is therefore
//! treated as a subsection header exactly when it has one line and its
//! left edge lies beyond the indentation threshold.

use crate::fragment::Fragment;
use crate::vocabulary::normalize_label;
use indexmap::IndexMap;

/// One record's fragments carved around its subsection headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subsections {
    /// Fragments before the first subsection header (addresses, remarks).
    pub info: Vec<Fragment>,
    /// Normalized header text → that subsection's fragments, header first,
    /// in document order.
    pub sections: IndexMap<String, Vec<Fragment>>,
}

/// Split one record's fragments into leading info and header-keyed
/// subsections.
///
/// Fragments before the first header land in `info`; every later fragment
/// belongs to the most recent header. Each subsection's fragment list
/// starts with the header fragment itself. When two headers normalize to
/// the same text, the later subsection replaces the earlier one and a
/// warning is logged.
pub fn split_subsections(fragments: &[Fragment], indent_min: f32) -> Subsections {
    let mut result = Subsections::default();
    let mut current: Option<String> = None;

    for fragment in fragments {
        if is_subsection_header(fragment, indent_min) {
            let header = normalize_label(fragment.key_line());
            if result.sections.contains_key(&header) {
                log::warn!("Duplicate subsection header '{}'; keeping the later occurrence", header);
            }
            result.sections.insert(header.clone(), vec![fragment.clone()]);
            current = Some(header);
        } else {
            match &current {
                Some(header) => {
                    if let Some(section) = result.sections.get_mut(header) {
                        section.push(fragment.clone());
                    }
                },
                None => result.info.push(fragment.clone()),
            }
        }
    }

    result
}

/// Header test: exactly one line and a left edge beyond `indent_min`.
///
/// Unpositioned fragments never qualify.
fn is_subsection_header(fragment: &Fragment, indent_min: f32) -> bool {
    fragment.lines.len() == 1
        && fragment
            .bbox
            .as_ref()
            .is_some_and(|bbox| bbox.left() > indent_min)
}
