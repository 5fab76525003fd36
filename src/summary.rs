//! Action-focused summary projection.
//!
//! Field crews rarely need the full organized document; they need the
//! actions. The summary keeps only subsections whose header matches the
//! action vocabulary, reshapes their fragments into label/value pairs,
//! and lifts the subscriber address and service id to the top. It copies
//! text out of the document and holds no references into it.

use crate::document::{FieldMap, Record, WorkOrder};
use crate::fragment::Fragment;
use crate::vocabulary::{normalize_label, Vocabulary};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Service-configuration label lifted to the summary as the subscriber
/// address.
const SUBSCRIBER_ADDRESS_LABEL: &str = "Subscriber address:";

/// Service-configuration label lifted to the summary as the service id.
const SERVICE_ID_LABEL: &str = "Service ID:";

/// Leading text of the info fragment carrying a record's street address.
const ADDRESS_PREFIX: &str = "Address:";

/// Key under which unlabeled action-section lines accumulate.
const NOTES_KEY: &str = "Notes";

/// One record's action-relevant view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// The record title.
    pub name: String,
    /// Street address from the record's info fragments, empty when absent.
    pub address: String,
    /// Normalized action header → that subsection's label/value pairs,
    /// with unlabeled lines gathered under `"Notes"`.
    pub actions: IndexMap<String, FieldMap>,
}

/// Filtered, reshaped projection of a work order retaining only action
/// content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Value of the `Subscriber address:` field, empty when absent.
    pub subscriber_address: String,
    /// Value of the `Service ID:` field, empty when absent.
    pub service_id: String,
    /// One entry per document record, in document order. Records without
    /// action subsections keep an entry with empty `actions`.
    pub records: Vec<SummaryRecord>,
}

impl Summary {
    /// Project a summary out of an organized document.
    ///
    /// # Examples
    ///
    /// ```
    /// use workorder_oxide::config::OrganizeConfig;
    /// use workorder_oxide::document::WorkOrder;
    /// use workorder_oxide::summary::Summary;
    ///
    /// let config = OrganizeConfig::default();
    /// let document = WorkOrder::default();
    /// let summary = Summary::project(&document, &config.vocabulary);
    /// assert!(summary.records.is_empty());
    /// ```
    pub fn project(document: &WorkOrder, vocabulary: &Vocabulary) -> Summary {
        Summary {
            subscriber_address: lifted_field(&document.service_config, SUBSCRIBER_ADDRESS_LABEL),
            service_id: lifted_field(&document.service_config, SERVICE_ID_LABEL),
            records: document
                .records
                .iter()
                .map(|record| SummaryRecord::project(record, vocabulary))
                .collect(),
        }
    }
}

impl SummaryRecord {
    fn project(record: &Record, vocabulary: &Vocabulary) -> SummaryRecord {
        let mut actions = IndexMap::new();
        for (header, fragments) in &record.sections {
            if vocabulary.is_action_header(header) {
                actions.insert(header.clone(), action_fields(fragments));
            }
        }
        SummaryRecord {
            name: record.title.clone(),
            address: record_address(&record.info),
            actions,
        }
    }
}

/// Look up a lifted field by its label, defaulting to empty.
fn lifted_field(fields: &FieldMap, label: &str) -> String {
    fields.get(&normalize_label(label)).cloned().unwrap_or_default()
}

/// The record's street address: the line after the `Address:` key of the
/// first info fragment that carries one. A fragment whose key line matches
/// but has no second line is skipped and the scan continues.
fn record_address(info: &[Fragment]) -> String {
    info.iter()
        .find_map(|fragment| {
            if fragment.key_line().starts_with(ADDRESS_PREFIX) {
                fragment.lines.get(1).cloned()
            } else {
                None
            }
        })
        .unwrap_or_default()
}

/// Rebuild one action subsection into label/value pairs.
///
/// The header fragment itself is skipped. Colon-terminated key lines
/// contribute a normalized label and the joined value lines; anything else
/// is appended to the `"Notes"` entry, newline-separated.
fn action_fields(fragments: &[Fragment]) -> FieldMap {
    let mut fields = FieldMap::new();
    for fragment in fragments.iter().skip(1) {
        let key_line = fragment.key_line();
        if key_line.ends_with(':') {
            if fragment.value_lines().is_empty() {
                log::debug!("Labeled line '{}' has no value; skipped", key_line);
                continue;
            }
            fields
                .entry(normalize_label(key_line))
                .or_insert_with(|| fragment.value_text());
        } else {
            let text = fragment.lines.join("\n");
            match fields.entry(NOTES_KEY.to_string()) {
                Entry::Occupied(mut entry) => {
                    let notes = entry.get_mut();
                    notes.push('\n');
                    notes.push_str(&text);
                },
                Entry::Vacant(entry) => {
                    entry.insert(text);
                },
            }
        }
    }
    fields
}
