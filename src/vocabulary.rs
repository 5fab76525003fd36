//! Known header strings and their structural classification.
//!
//! Work-order reports carry no formal grammar; the organizer recognizes
//! structure by matching fragment key lines against a small vocabulary of
//! header strings observed in production reports. The built-in tables cover
//! the standard report layout and can be overridden from a JSON file for
//! report variants that use different wording.

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Document title recognized at the top of every report page.
pub(crate) const REPORT_TITLE: &str = "Work Order Report";
/// Marker opening the service-configuration section.
pub(crate) const SERVICE_SECTION: &str = "Service Configurations";
/// Marker opening the site-operations section.
pub(crate) const OPERATIONS_SECTION: &str = "Site Operations";
/// Leading text of the fragment that starts one repeating record.
pub(crate) const RECORD_MARKER: &str = "Flexibility point";

const SUBSECTION_HEADERS: &[&str] = &[
    "Add interface termination",
    "Existing interface termination",
    "Add drop cable",
    "Add equipment",
    "Connect equipment",
    "Add cross connection",
    "Add ",
    "Existing ",
    "Remove",
    "Splice",
];

const SERVICE_FIELDS: &[&str] = &[
    "Work order ID:",
    "Service ID:",
    "Service:",
    "Service type:",
    "From Equipment:",
    "To Equipment:",
    "From Port (Logical location):",
    "Subscriber address:",
    "Date:",
];

const RECORD_FIELDS: &[&str] = &[
    "Flexibility point:",
    "Address:",
    "Position:",
    "Remark:",
    "Service:",
    "Interface:",
    "From:",
    "To address:",
    "Equipment ref.:",
    "Duct node name/id:",
    "Duct node pos:",
    "Duct node address:",
    "Type:",
    "Catalogue name:",
    "Service type:",
    "Connection:",
];

const ACTION_KEYWORDS: &[&str] = &["Add", "Connect", "Remove"];

/// Structural level of a known header string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderLevel {
    /// Report title repeated at the top of every page
    Title,
    /// Top-level section marker
    Section,
    /// Boundary of one repeating record
    RecordMarker,
    /// Record-local subsection header
    SubsectionHeader,
    /// Labeled field inside a section or subsection
    FieldLabel,
}

impl HeaderLevel {
    /// Get the hierarchy level as a number (0 = title, 4 = field label).
    ///
    /// # Examples
    ///
    /// ```
    /// use workorder_oxide::vocabulary::HeaderLevel;
    ///
    /// assert_eq!(HeaderLevel::Title.hierarchy_level(), 0);
    /// assert_eq!(HeaderLevel::FieldLabel.hierarchy_level(), 4);
    /// ```
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            HeaderLevel::Title => 0,
            HeaderLevel::Section => 1,
            HeaderLevel::RecordMarker => 2,
            HeaderLevel::SubsectionHeader => 3,
            HeaderLevel::FieldLabel => 4,
        }
    }
}

/// Which section's field-label table a lookup consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// The service-configurations section at the head of the report.
    ServiceConfig,
    /// The site-operations section and its repeating records.
    SiteOperations,
}

/// Classification tables mapping known header strings to structural levels.
///
/// Loaded tables replace the built-ins wholesale per level; absent keys in
/// an override file keep the built-in table for that level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Report titles (repeated page headers, ignored during extraction).
    pub titles: Vec<String>,
    /// Top-level section markers in report order: the service-configurations
    /// marker first, the site-operations marker second.
    pub sections: Vec<String>,
    /// Repeating-record boundary markers. Grouping consults the first entry.
    pub record_markers: Vec<String>,
    /// Record-local subsection headers.
    pub subsection_headers: Vec<String>,
    /// Field labels valid inside the service-configurations section.
    pub service_fields: Vec<String>,
    /// Field labels valid inside site-operation records.
    pub record_fields: Vec<String>,
    /// Substrings marking a subsection header as an action for summaries.
    pub action_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let own = |table: &[&str]| table.iter().map(|s| s.to_string()).collect();
        Vocabulary {
            titles: vec![REPORT_TITLE.to_string()],
            sections: vec![SERVICE_SECTION.to_string(), OPERATIONS_SECTION.to_string()],
            record_markers: vec![RECORD_MARKER.to_string()],
            subsection_headers: own(SUBSECTION_HEADERS),
            service_fields: own(SERVICE_FIELDS),
            record_fields: own(RECORD_FIELDS),
            action_keywords: own(ACTION_KEYWORDS),
        }
    }
}

impl Vocabulary {
    /// Load a vocabulary override from a JSON file.
    ///
    /// The file holds any subset of the table names; missing tables keep
    /// their built-in contents.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let vocabulary = serde_json::from_str(&text)?;
        Ok(vocabulary)
    }

    /// Marker opening the service-configurations section.
    ///
    /// Reads the first `sections` entry; an empty table falls back to the
    /// built-in marker so segmentation stays total.
    pub fn service_section(&self) -> &str {
        self.sections.first().map(String::as_str).unwrap_or(SERVICE_SECTION)
    }

    /// Marker opening the site-operations section (second `sections` entry).
    pub fn operations_section(&self) -> &str {
        self.sections.get(1).map(String::as_str).unwrap_or(OPERATIONS_SECTION)
    }

    /// Boundary marker that starts one repeating record.
    pub fn record_marker(&self) -> &str {
        self.record_markers.first().map(String::as_str).unwrap_or(RECORD_MARKER)
    }

    /// The field-label table consulted for one section scope.
    pub fn field_labels(&self, scope: FieldScope) -> &[String] {
        match scope {
            FieldScope::ServiceConfig => &self.service_fields,
            FieldScope::SiteOperations => &self.record_fields,
        }
    }

    /// Classify a fragment key line against the tables, most significant
    /// level first. Returns `None` for unrecognized text.
    pub fn classify(&self, key_line: &str, scope: FieldScope) -> Option<HeaderLevel> {
        let tables: [(&[String], HeaderLevel); 5] = [
            (&self.titles, HeaderLevel::Title),
            (&self.sections, HeaderLevel::Section),
            (&self.record_markers, HeaderLevel::RecordMarker),
            (&self.subsection_headers, HeaderLevel::SubsectionHeader),
            (self.field_labels(scope), HeaderLevel::FieldLabel),
        ];
        for (table, level) in tables {
            if table.iter().any(|entry| key_line.starts_with(entry.as_str())) {
                return Some(level);
            }
        }
        None
    }

    /// Whether a normalized subsection header describes an action.
    ///
    /// Keywords match as case-sensitive substrings, so `"Add equipment"`
    /// and `"Connect equipment"` qualify while `"Existing drop cable"`
    /// does not.
    pub fn is_action_header(&self, header: &str) -> bool {
        self.action_keywords.iter().any(|kw| header.contains(kw.as_str()))
    }
}

/// Normalize a label or header key: trim surrounding whitespace and strip
/// at most one trailing colon.
///
/// # Examples
///
/// ```
/// use workorder_oxide::vocabulary::normalize_label;
///
/// assert_eq!(normalize_label("Service ID:"), "Service ID");
/// assert_eq!(normalize_label("  Remark: "), "Remark");
/// assert_eq!(normalize_label("Add equipment"), "Add equipment");
/// ```
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_suffix(':').unwrap_or(trimmed);
    stripped.trim_end().to_string()
}
