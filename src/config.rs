//! Configuration for document organizing.

use crate::vocabulary::Vocabulary;

/// Sentinel text of the footer-link fragment that closes the site-operations
/// section. Reports without footer links end the section at the last fragment.
const END_SENTINEL: &str = "file://";

/// Left-edge offset (page units) a single-line fragment must exceed to be
/// treated as a subsection header rather than record info.
const SUBSECTION_INDENT_MIN: f32 = 80.0;

/// Organizing configuration for one run.
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// Sentinel closing the site-operations section, matched as a substring
    /// of the key line.
    pub end_sentinel: String,

    /// Minimum left-edge offset for subsection-header detection.
    pub subsection_indent_min: f32,

    /// Header vocabulary consulted for section and record markers, field
    /// labels, and action keywords.
    pub vocabulary: Vocabulary,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganizeConfig {
    /// Create new configuration with the standard report vocabulary.
    pub fn new() -> Self {
        Self {
            end_sentinel: END_SENTINEL.to_string(),
            subsection_indent_min: SUBSECTION_INDENT_MIN,
            vocabulary: Vocabulary::default(),
        }
    }

    /// Replace the header vocabulary. Segmentation markers follow the
    /// replacement's `sections` and `record_markers` tables.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Set the record boundary marker.
    pub fn with_record_marker(mut self, marker: impl Into<String>) -> Self {
        self.vocabulary.record_markers = vec![marker.into()];
        self
    }

    /// Set the end-of-report sentinel.
    pub fn with_end_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.end_sentinel = sentinel.into();
        self
    }

    /// Set the subsection-header indentation threshold.
    pub fn with_subsection_indent_min(mut self, indent: f32) -> Self {
        self.subsection_indent_min = indent;
        self
    }
}
