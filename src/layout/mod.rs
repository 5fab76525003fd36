//! Segmentation algorithms for work-order reports.
//!
//! This module carves an ordered fragment sequence into the report
//! hierarchy:
//! - Reading-order sorting (page, then vertical, then horizontal position)
//! - Top-level section boundary detection
//! - Label/value field extraction
//! - Repeating-record grouping
//! - Indentation-based subsection splitting

pub mod field_extractor;
pub mod reading_order;
pub mod record_grouper;
pub mod section_splitter;
pub mod subsection_splitter;

// Re-export main types
pub use field_extractor::extract_fields;
pub use reading_order::{is_reading_order, sort_fragments};
pub use record_grouper::{group_records, RecordGroup};
pub use section_splitter::{find_fragment, find_section_bounds, SectionBounds};
pub use subsection_splitter::{split_subsections, Subsections};
