//! Fragment input sources.
//!
//! A [`FragmentSource`] produces the raw positioned fragments of one
//! source document. The organizer consumes whatever a source emits; it
//! never merges, splits, or re-extracts fragments itself. Sources return
//! fragments in extraction order, and callers are expected to run
//! [`sort_fragments`](crate::layout::sort_fragments) before organizing.

pub mod json;

pub use json::JsonFragmentSource;

use crate::error::Result;
use crate::fragment::Fragment;

/// A producer of positioned text fragments for one source document.
pub trait FragmentSource {
    /// Produce every text fragment of the document across all pages.
    ///
    /// Fragments for which the extraction layer reported no position come
    /// back with `bbox: None`; downstream sorting places them at the top
    /// of their page.
    fn fragments(&mut self) -> Result<Vec<Fragment>>;
}
