//! Organized work-order document model.
//!
//! A [`WorkOrder`] is the fully organized form of one report: the labeled
//! fields of its service-configurations section plus its site-operation
//! records. [`WorkOrder::organize`] is the orchestration entry point that
//! runs the segmentation components over an ordered fragment sequence.

use crate::config::OrganizeConfig;
use crate::fragment::Fragment;
use crate::layout::record_grouper::RecordGroup;
use crate::layout::{extract_fields, find_section_bounds, group_records, split_subsections};
use crate::vocabulary::FieldScope;
pub use crate::layout::field_extractor::FieldMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One repeating site-operation record (a "Flexibility Point").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record title from the boundary fragment's second line, or a
    /// positional fallback such as `"Flexibility Point 1"`.
    pub title: String,
    /// Fragments before the first subsection header.
    pub info: Vec<Fragment>,
    /// Normalized subsection header → that subsection's fragments.
    pub sections: IndexMap<String, Vec<Fragment>>,
}

impl Record {
    fn from_group(group: RecordGroup, indent_min: f32) -> Record {
        let split = split_subsections(&group.fragments, indent_min);
        Record {
            title: group.title,
            info: split.info,
            sections: split.sections,
        }
    }

    /// Fields extracted from this record's info fragments.
    pub fn info_fields(&self, labels: &[String]) -> FieldMap {
        extract_fields(&self.info, labels)
    }
}

/// A fully organized work-order document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Labeled fields of the service-configurations section.
    pub service_config: FieldMap,
    /// Site-operation records in document order. Duplicate titles are kept
    /// as separate entries.
    pub records: Vec<Record>,
}

impl WorkOrder {
    /// Organize an ordered fragment sequence into the document hierarchy.
    ///
    /// The sequence is expected to be in reading order (see
    /// [`sort_fragments`](crate::layout::sort_fragments)); organizing does
    /// not reorder fragments. Section and record markers come from the
    /// configuration's [`Vocabulary`](crate::vocabulary::Vocabulary), so a
    /// loaded override changes how reports are segmented.
    ///
    /// Structural gaps degrade rather than fail: a report without a
    /// service-configurations section yields empty `service_config`, one
    /// without a site-operations section or without record markers yields
    /// empty `records`. Each degradation is logged as a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use workorder_oxide::config::OrganizeConfig;
    /// use workorder_oxide::document::WorkOrder;
    /// use workorder_oxide::fragment::Fragment;
    ///
    /// let fragments = vec![
    ///     Fragment::new(1, vec!["Service Configurations".to_string()], None),
    ///     Fragment::new(1, vec!["Service ID:".to_string(), "SVC-42".to_string()], None),
    ///     Fragment::new(1, vec!["Site Operations".to_string()], None),
    ///     Fragment::new(1, vec!["Flexibility point".to_string(), "FP-A".to_string()], None),
    /// ];
    /// let document = WorkOrder::organize(&fragments, &OrganizeConfig::default());
    ///
    /// assert_eq!(document.service_config.get("Service ID").map(String::as_str), Some("SVC-42"));
    /// assert_eq!(document.records.len(), 1);
    /// assert_eq!(document.records[0].title, "FP-A");
    /// ```
    pub fn organize(fragments: &[Fragment], config: &OrganizeConfig) -> WorkOrder {
        let service_config = Self::organize_service_config(fragments, config);
        let records = Self::organize_records(fragments, config);
        WorkOrder { service_config, records }
    }

    fn organize_service_config(fragments: &[Fragment], config: &OrganizeConfig) -> FieldMap {
        let vocabulary = &config.vocabulary;
        let bounds = match find_section_bounds(
            fragments,
            vocabulary.service_section(),
            vocabulary.operations_section(),
        ) {
            Ok(bounds) => bounds,
            Err(err) => {
                log::warn!("{}; service configuration left empty", err);
                return FieldMap::new();
            },
        };
        extract_fields(bounds.slice(fragments), vocabulary.field_labels(FieldScope::ServiceConfig))
    }

    fn organize_records(fragments: &[Fragment], config: &OrganizeConfig) -> Vec<Record> {
        let vocabulary = &config.vocabulary;
        let bounds = match find_section_bounds(
            fragments,
            vocabulary.operations_section(),
            &config.end_sentinel,
        ) {
            Ok(bounds) => bounds,
            Err(err) => {
                log::warn!("{}; no site-operation records extracted", err);
                return Vec::new();
            },
        };
        let groups = group_records(bounds.slice(fragments), vocabulary.record_marker());
        if groups.is_empty() {
            log::warn!(
                "No '{}' markers found in the {} section; document has no records",
                vocabulary.record_marker(),
                vocabulary.operations_section()
            );
        }
        groups
            .into_iter()
            .map(|group| Record::from_group(group, config.subsection_indent_min))
            .collect()
    }

    /// Find the first record with a given title.
    pub fn find_record(&self, title: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.title == title)
    }
}
