//! Text fragments produced by the extraction layer.
//!
//! A [`Fragment`] is the atomic unit the organizer works with: one visually
//! contiguous chunk of text, its page number, and (when the extraction layer
//! reported one) its bounding box. Fragments are never merged or split by
//! the organizer; classification only inspects their first line.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One indivisible chunk of extracted text with an optional page position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// 1-based page number the fragment was extracted from.
    pub page: u32,
    /// Text lines of the fragment, in top-to-bottom order. Never empty for
    /// fragments produced by a [`FragmentSource`](crate::source::FragmentSource).
    pub lines: Vec<String>,
    /// Bounding box in page units, absent when the extraction layer did not
    /// report a position.
    #[serde(rename = "position", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Rect>,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(page: u32, lines: Vec<String>, bbox: Option<Rect>) -> Self {
        Self { page, lines, bbox }
    }

    /// The first line of the fragment, used for all classification decisions.
    ///
    /// Returns the empty string for a fragment with no lines.
    pub fn key_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// All lines after the key line.
    pub fn value_lines(&self) -> &[String] {
        if self.lines.len() > 1 {
            &self.lines[1..]
        } else {
            &[]
        }
    }

    /// The value lines joined with newlines, as stored in field maps.
    pub fn value_text(&self) -> String {
        self.value_lines().join("\n")
    }
}

/// Reassemble the raw text of a fragment run, one line per row.
///
/// # Examples
///
/// ```
/// use workorder_oxide::fragment::{raw_text, Fragment};
///
/// let fragments = vec![
///     Fragment::new(1, vec!["Service:".to_string(), "Broadband".to_string()], None),
///     Fragment::new(1, vec!["Remark:".to_string()], None),
/// ];
/// assert_eq!(raw_text(&fragments), "Service:\nBroadband\nRemark:");
/// ```
pub fn raw_text(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .flat_map(|f| f.lines.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
