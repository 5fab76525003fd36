#![allow(dead_code)]
//! Integration tests for the report organizing pipeline.
//!
//! These tests drive the complete pipeline with mock fragments simulating
//! realistic work-order report layouts.

use std::fs;

use tempfile::tempdir;
use workorder_oxide::config::OrganizeConfig;
use workorder_oxide::document::WorkOrder;
use workorder_oxide::fragment::{raw_text, Fragment};
use workorder_oxide::geometry::Rect;
use workorder_oxide::layout::{find_section_bounds, group_records, sort_fragments};
use workorder_oxide::vocabulary::Vocabulary;

// ============================================================================
// Helper Functions for Creating Mock Fragments
// ============================================================================

/// Left margin used for body fragments.
const BODY_X: f32 = 56.0;

/// Indented column used for subsection headers.
const HEADER_X: f32 = 92.0;

/// Create a fragment at an explicit page position.
fn frag_at(page: u32, x: f32, y: f32, lines: &[&str]) -> Fragment {
    Fragment::new(
        page,
        lines.iter().map(|l| l.to_string()).collect(),
        Some(Rect::new(x, y, x + 140.0, y + 11.0 * lines.len() as f32)),
    )
}

/// Create a body fragment on page 1 at the given row.
fn body(y: f32, lines: &[&str]) -> Fragment {
    frag_at(1, BODY_X, y, lines)
}

/// Create an indented subsection-header fragment on page 1.
fn header(y: f32, text: &str) -> Fragment {
    frag_at(1, HEADER_X, y, &[text])
}

/// A realistic single-record report.
fn standard_report() -> Vec<Fragment> {
    vec![
        body(40.0, &["Work Order Report"]),
        body(70.0, &["Service Configurations"]),
        body(90.0, &["Work order ID:", "WO-2024-1042"]),
        body(110.0, &["Subscriber address:", "123 Main St"]),
        body(130.0, &["Service ID:", "SVC-42"]),
        body(150.0, &["Site Operations"]),
        body(170.0, &["Flexibility point", "FP-A"]),
        body(190.0, &["Address:", "5 Cable Rd"]),
        header(210.0, "Add equipment"),
        body(230.0, &["Type:", "Splitter"]),
        body(250.0, &["file://share/wo-1042.pdf"]),
    ]
}

// ============================================================================
// Reading Order
// ============================================================================

#[test]
fn test_shuffled_fragments_sort_back_into_reading_order() {
    let expected = standard_report();
    let mut shuffled = vec![
        expected[4].clone(),
        expected[10].clone(),
        expected[0].clone(),
        expected[7].clone(),
        expected[2].clone(),
        expected[9].clone(),
        expected[1].clone(),
        expected[5].clone(),
        expected[8].clone(),
        expected[3].clone(),
        expected[6].clone(),
    ];
    sort_fragments(&mut shuffled);
    assert_eq!(shuffled, expected);
}

#[test]
fn test_multi_page_reports_keep_page_order() {
    let mut fragments = vec![
        frag_at(2, BODY_X, 40.0, &["Flexibility point", "FP-B"]),
        frag_at(1, BODY_X, 700.0, &["Flexibility point", "FP-A"]),
    ];
    sort_fragments(&mut fragments);
    assert_eq!(fragments[0].lines[1], "FP-A");
    assert_eq!(fragments[1].lines[1], "FP-B");
}

// ============================================================================
// Section Totality
// ============================================================================

#[test]
fn test_fragments_between_markers_belong_to_the_section() {
    let fragments = standard_report();
    let bounds =
        find_section_bounds(&fragments, "Service Configurations", "Site Operations").unwrap();
    let section = bounds.slice(&fragments);

    // Every fragment strictly between the two markers is in the slice.
    for fragment in &fragments[bounds.start + 1..bounds.end] {
        assert!(section.contains(fragment));
    }
    // And the slice holds nothing from outside the bounds.
    assert_eq!(section.len(), bounds.end - bounds.start);
    assert_eq!(section[0].key_line(), "Service Configurations");
}

// ============================================================================
// Record Coverage
// ============================================================================

#[test]
fn test_records_tile_the_operations_section() {
    let mut fragments = standard_report();
    // Add a second record to exercise consecutive boundaries.
    fragments.insert(10, body(242.0, &["Flexibility point", "FP-B"]));
    fragments.insert(11, body(246.0, &["Remark:", "spare pair"]));
    sort_fragments(&mut fragments);

    let bounds = find_section_bounds(&fragments, "Site Operations", "file://").unwrap();
    let section = bounds.slice(&fragments);
    let groups = group_records(section, "Flexibility point");

    assert_eq!(groups.len(), 2);

    // Concatenating the groups reproduces the section from the first
    // boundary onward, in order, with nothing lost or duplicated.
    let first_boundary = section
        .iter()
        .position(|f| f.key_line().contains("Flexibility point"))
        .unwrap();
    let tiled: Vec<Fragment> = groups.into_iter().flat_map(|g| g.fragments).collect();
    assert_eq!(tiled, section[first_boundary..].to_vec());
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[test]
fn test_organize_standard_report() {
    let document = WorkOrder::organize(&standard_report(), &OrganizeConfig::default());

    assert_eq!(
        document.service_config.get("Work order ID").map(String::as_str),
        Some("WO-2024-1042")
    );
    assert_eq!(
        document.service_config.get("Subscriber address").map(String::as_str),
        Some("123 Main St")
    );

    assert_eq!(document.records.len(), 1);
    let record = &document.records[0];
    assert_eq!(record.title, "FP-A");
    assert!(record.info.iter().any(|f| f.key_line() == "Address:"));

    let section = record.sections.get("Add equipment").unwrap();
    assert_eq!(section[0].key_line(), "Add equipment");
    assert_eq!(section[1].key_line(), "Type:");
}

#[test]
fn test_footer_sentinel_is_not_part_of_any_record() {
    let document = WorkOrder::organize(&standard_report(), &OrganizeConfig::default());
    for record in &document.records {
        assert!(!record.info.iter().any(|f| f.key_line().contains("file://")));
        for section in record.sections.values() {
            assert!(!section.iter().any(|f| f.key_line().contains("file://")));
        }
    }
}

#[test]
fn test_low_indent_header_text_stays_in_info() {
    let mut fragments = standard_report();
    // The same header text flush with the body margin is not a header.
    fragments[8] = body(210.0, &["Add equipment"]);
    let document = WorkOrder::organize(&fragments, &OrganizeConfig::default());
    let record = &document.records[0];
    assert!(record.sections.get("Add equipment").is_none());
    assert!(record.info.iter().any(|f| f.key_line() == "Add equipment"));
}

#[test]
fn test_two_line_indented_fragment_is_not_a_header() {
    let mut fragments = standard_report();
    fragments[8] = frag_at(1, HEADER_X, 210.0, &["Add equipment", "Splitter"]);
    let document = WorkOrder::organize(&fragments, &OrganizeConfig::default());
    assert!(document.records[0].sections.is_empty());
}

#[test]
fn test_organize_without_any_markers() {
    let fragments = vec![
        body(40.0, &["An unrelated page"]),
        body(60.0, &["with unrelated text"]),
    ];
    let document = WorkOrder::organize(&fragments, &OrganizeConfig::default());
    assert!(document.service_config.is_empty());
    assert!(document.records.is_empty());
}

#[test]
fn test_organize_is_deterministic() {
    let fragments = standard_report();
    let config = OrganizeConfig::default();
    assert_eq!(
        WorkOrder::organize(&fragments, &config),
        WorkOrder::organize(&fragments, &config)
    );
}

#[test]
fn test_raw_text_reassembles_the_report() {
    let fragments = vec![body(40.0, &["Service ID:", "SVC-42"]), body(60.0, &["Date:", "2024-05-14"])];
    assert_eq!(raw_text(&fragments), "Service ID:\nSVC-42\nDate:\n2024-05-14");
}

// ============================================================================
// Custom Markers
// ============================================================================

#[test]
fn test_custom_record_marker() {
    let fragments = vec![
        body(40.0, &["Service Configurations"]),
        body(60.0, &["Site Operations"]),
        body(80.0, &["Verteilerpunkt", "VP-1"]),
    ];
    let config = OrganizeConfig::new().with_record_marker("Verteilerpunkt");
    let document = WorkOrder::organize(&fragments, &config);
    assert_eq!(document.records.len(), 1);
    assert_eq!(document.records[0].title, "VP-1");
}

#[test]
fn test_vocabulary_file_changes_segmentation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("markers-de.json");
    fs::write(
        &path,
        r#"{"sections": ["Leitungen", "Standorte"], "record_markers": ["Verteilerpunkt"]}"#,
    )
    .unwrap();
    let vocabulary = Vocabulary::from_path(&path).unwrap();
    let config = OrganizeConfig::new().with_vocabulary(vocabulary);

    let fragments = vec![
        body(40.0, &["Leitungen"]),
        body(60.0, &["Service ID:", "SVC-7"]),
        body(80.0, &["Standorte"]),
        body(100.0, &["Verteilerpunkt", "VP-1"]),
        body(120.0, &["Address:", "Hauptstr. 9"]),
    ];
    let document = WorkOrder::organize(&fragments, &config);

    // Field tables absent from the override file stay built in.
    assert_eq!(document.service_config.get("Service ID").map(String::as_str), Some("SVC-7"));
    assert_eq!(document.records.len(), 1);
    assert_eq!(document.records[0].title, "VP-1");
    assert!(document.records[0].info.iter().any(|f| f.key_line() == "Address:"));
}
