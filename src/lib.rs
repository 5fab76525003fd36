// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Workorder Oxide
//!
//! Organizes converted work-order reports into structured, labeled JSON
//! documents.
//!
//! Upstream extraction turns each report PDF into a flat list of
//! positioned text fragments. This crate is the step after that: it sorts
//! the fragments into reading order and carves the sequence into the
//! report hierarchy using a small vocabulary of known headers and layout
//! cues (indentation, line counts, trailing colons).
//!
//! ## Pipeline
//!
//! ```text
//! converted JSON ── FragmentSource ──> Vec<Fragment>
//!                                          │ sort_fragments
//!                                          ▼
//!                                   ordered fragments
//!                                          │ WorkOrder::organize
//!                                          ▼
//!           service_config fields  +  records (info / subsections)
//!                                          │ Summary::project (optional)
//!                                          ▼
//!                                   action summary
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use workorder_oxide::config::OrganizeConfig;
//! use workorder_oxide::document::WorkOrder;
//! use workorder_oxide::layout::sort_fragments;
//! use workorder_oxide::source::{FragmentSource, JsonFragmentSource};
//! use workorder_oxide::summary::Summary;
//!
//! # fn main() -> workorder_oxide::error::Result<()> {
//! let config = OrganizeConfig::default();
//!
//! let mut source = JsonFragmentSource::new("dataset/converted/wo-1042.json");
//! let mut fragments = source.fragments()?;
//! sort_fragments(&mut fragments);
//!
//! let document = WorkOrder::organize(&fragments, &config);
//! let summary = Summary::project(&document, &config.vocabulary);
//!
//! for record in &summary.records {
//!     println!("{} @ {}: {} actions", record.name, record.address, record.actions.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Fragment model and input sources
pub mod fragment;
pub mod geometry;
pub mod source;

// Segmentation
pub mod layout;
pub mod vocabulary;

// Organized document model
pub mod config;
pub mod document;
pub mod summary;

// Batch plumbing
pub mod batch;
pub mod logging;
pub mod metadata;

// Re-exports
pub use config::OrganizeConfig;
pub use document::{FieldMap, Record, WorkOrder};
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use summary::{Summary, SummaryRecord};
pub use vocabulary::Vocabulary;

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on malformed coordinates.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
