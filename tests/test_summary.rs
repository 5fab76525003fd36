#![allow(dead_code)]
//! Integration tests for the action summary projection.

use workorder_oxide::config::OrganizeConfig;
use workorder_oxide::document::WorkOrder;
use workorder_oxide::fragment::Fragment;
use workorder_oxide::geometry::Rect;
use workorder_oxide::layout::sort_fragments;
use workorder_oxide::summary::Summary;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a body fragment on page 1 at the given row.
fn body(y: f32, lines: &[&str]) -> Fragment {
    Fragment::new(
        1,
        lines.iter().map(|l| l.to_string()).collect(),
        Some(Rect::new(56.0, y, 196.0, y + 11.0 * lines.len() as f32)),
    )
}

/// Create an indented subsection-header fragment on page 1.
fn header(y: f32, text: &str) -> Fragment {
    Fragment::new(
        1,
        vec![text.to_string()],
        Some(Rect::new(92.0, y, 232.0, y + 11.0)),
    )
}

fn organize_and_project(fragments: &[Fragment]) -> Summary {
    let config = OrganizeConfig::default();
    let document = WorkOrder::organize(fragments, &config);
    Summary::project(&document, &config.vocabulary)
}

// ============================================================================
// End-to-End Projection
// ============================================================================

#[test]
fn test_single_record_report_projects_to_one_action() {
    let mut fragments = vec![
        body(10.0, &["Service Configurations"]),
        body(20.0, &["Subscriber address:", "123 Main St"]),
        body(30.0, &["Service ID:", "SVC-42"]),
        body(40.0, &["Site Operations"]),
        body(50.0, &["Flexibility point", "FP-A"]),
        body(60.0, &["Address:", "5 Cable Rd"]),
        header(70.0, "Add equipment"),
        body(80.0, &["Type:", "Splitter"]),
    ];
    sort_fragments(&mut fragments);
    let summary = organize_and_project(&fragments);

    assert_eq!(summary.subscriber_address, "123 Main St");
    assert_eq!(summary.service_id, "SVC-42");

    assert_eq!(summary.records.len(), 1);
    let record = &summary.records[0];
    assert_eq!(record.name, "FP-A");
    assert_eq!(record.address, "5 Cable Rd");

    assert_eq!(record.actions.len(), 1);
    let fields = record.actions.get("Add equipment").unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields.get("Type").map(String::as_str), Some("Splitter"));
}

#[test]
fn test_report_without_record_markers_projects_no_records() {
    let mut fragments = vec![
        body(10.0, &["Service Configurations"]),
        body(20.0, &["Service ID:", "SVC-42"]),
        body(30.0, &["Site Operations"]),
        body(40.0, &["Remark:", "no field work required"]),
    ];
    sort_fragments(&mut fragments);
    let summary = organize_and_project(&fragments);
    assert!(summary.records.is_empty());
    assert_eq!(summary.service_id, "SVC-42");
}

#[test]
fn test_multiple_records_project_in_document_order() {
    let mut fragments = vec![
        body(10.0, &["Service Configurations"]),
        body(20.0, &["Site Operations"]),
        body(30.0, &["Flexibility point", "FP-A"]),
        body(40.0, &["Address:", "5 Cable Rd"]),
        header(50.0, "Add drop cable"),
        body(60.0, &["Catalogue name:", "DC-12"]),
        body(70.0, &["Flexibility point", "FP-B"]),
        body(80.0, &["Address:", "7 Cable Rd"]),
        header(90.0, "Remove"),
        body(100.0, &["Equipment ref.:", "EQ-9"]),
    ];
    sort_fragments(&mut fragments);
    let summary = organize_and_project(&fragments);

    let names: Vec<&str> = summary.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["FP-A", "FP-B"]);

    assert!(summary.records[0].actions.contains_key("Add drop cable"));
    assert_eq!(
        summary.records[1]
            .actions
            .get("Remove")
            .and_then(|fields| fields.get("Equipment ref."))
            .map(String::as_str),
        Some("EQ-9")
    );
}

#[test]
fn test_non_action_subsections_survive_in_document_but_not_summary() {
    let mut fragments = vec![
        body(10.0, &["Service Configurations"]),
        body(20.0, &["Site Operations"]),
        body(30.0, &["Flexibility point", "FP-A"]),
        header(40.0, "Existing interface termination"),
        body(50.0, &["Interface:", "IF-3"]),
        header(60.0, "Connect equipment"),
        body(70.0, &["Position:", "ODF-1"]),
    ];
    sort_fragments(&mut fragments);

    let config = OrganizeConfig::default();
    let document = WorkOrder::organize(&fragments, &config);
    let summary = Summary::project(&document, &config.vocabulary);

    // The document keeps both subsections.
    let record = &document.records[0];
    assert!(record.sections.contains_key("Existing interface termination"));
    assert!(record.sections.contains_key("Connect equipment"));

    // The summary keeps only the action.
    let actions = &summary.records[0].actions;
    assert_eq!(actions.len(), 1);
    assert!(actions.contains_key("Connect equipment"));
}

#[test]
fn test_unlabeled_lines_accumulate_as_notes() {
    let mut fragments = vec![
        body(10.0, &["Service Configurations"]),
        body(20.0, &["Site Operations"]),
        body(30.0, &["Flexibility point", "FP-A"]),
        header(40.0, "Add cross connection"),
        body(50.0, &["patch both trays"]),
        body(60.0, &["label the spare pair"]),
        body(70.0, &["Position:", "ODF-2"]),
    ];
    sort_fragments(&mut fragments);
    let summary = organize_and_project(&fragments);

    let fields = summary.records[0].actions.get("Add cross connection").unwrap();
    assert_eq!(
        fields.get("Notes").map(String::as_str),
        Some("patch both trays\nlabel the spare pair")
    );
    assert_eq!(fields.get("Position").map(String::as_str), Some("ODF-2"));
}

#[test]
fn test_projection_copies_text_instead_of_borrowing() {
    let mut fragments = vec![
        body(10.0, &["Service Configurations"]),
        body(20.0, &["Site Operations"]),
        body(30.0, &["Flexibility point", "FP-A"]),
        header(40.0, "Add equipment"),
        body(50.0, &["Type:", "Splitter"]),
    ];
    sort_fragments(&mut fragments);

    let config = OrganizeConfig::default();
    let document = WorkOrder::organize(&fragments, &config);
    let summary = Summary::project(&document, &config.vocabulary);
    drop(document);

    // The summary owns its strings; the document is gone.
    assert_eq!(summary.records[0].name, "FP-A");
}
