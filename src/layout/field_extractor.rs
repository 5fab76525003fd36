//! Label/value field extraction within a section.
//!
//! Sections carry their data as label fragments: the key line holds a
//! known label (usually colon-terminated) and the remaining lines hold the
//! value. Extraction walks the section once, claiming each label the first
//! time a fragment matches it.

use crate::fragment::Fragment;
use crate::vocabulary::normalize_label;
use indexmap::IndexMap;

/// Ordered mapping from normalized field label to extracted value.
///
/// Iteration order is insertion order, which for extracted fields is the
/// order the matching fragments appear in the document.
pub type FieldMap = IndexMap<String, String>;

/// Extract known labeled fields from a fragment run.
///
/// Scans `fragments` once in order. A fragment matches a label when its
/// key line contains the label text and the fragment has at least one
/// value line. Each label is satisfied at most once, by the first matching
/// fragment; the scan stops early when every label has been found.
///
/// Labels with no matching fragment are simply absent from the result.
///
/// # Examples
///
/// ```
/// use workorder_oxide::fragment::Fragment;
/// use workorder_oxide::layout::extract_fields;
///
/// let fragments = vec![
///     Fragment::new(1, vec!["Service ID:".to_string(), "SVC-42".to_string()], None),
///     Fragment::new(1, vec!["Date:".to_string(), "2024-05-14".to_string()], None),
/// ];
/// let labels = vec!["Service ID:".to_string(), "Date:".to_string(), "Remark:".to_string()];
/// let fields = extract_fields(&fragments, &labels);
///
/// assert_eq!(fields.get("Service ID").map(String::as_str), Some("SVC-42"));
/// assert_eq!(fields.get("Date").map(String::as_str), Some("2024-05-14"));
/// assert!(fields.get("Remark").is_none());
/// ```
pub fn extract_fields(fragments: &[Fragment], labels: &[String]) -> FieldMap {
    let mut fields = FieldMap::new();
    let mut satisfied = vec![false; labels.len()];
    let mut remaining = labels.len();

    for fragment in fragments {
        if remaining == 0 {
            break;
        }
        let key_line = fragment.key_line();
        for (index, label) in labels.iter().enumerate() {
            if satisfied[index] || !key_line.contains(label.as_str()) {
                continue;
            }
            if fragment.value_lines().is_empty() {
                log::debug!("Label '{}' matched a fragment with no value lines; skipped", label);
                continue;
            }
            satisfied[index] = true;
            remaining -= 1;
            fields
                .entry(normalize_label(key_line))
                .or_insert_with(|| fragment.value_text());
        }
    }

    fields
}
