//! Fragment source for converted-document interchange JSON.
//!
//! The extraction layer writes one JSON file per source report:
//!
//! ```json
//! {
//!   "metadata": { "filename": "wo-1042.pdf", "...": "..." },
//!   "content": {
//!     "blocks": [
//!       { "page": 1, "lines": ["Service ID:", "SVC-42"], "position": [56.7, 103.3, 289.0, 131.9] }
//!     ],
//!     "raw": "Service ID:\nSVC-42"
//!   }
//! }
//! ```
//!
//! Older converter versions wrote each block's text as a single `"text"`
//! string instead of a `"lines"` array; both shapes are accepted. The
//! `metadata` and `raw` members are ignored here, and unknown members do
//! not fail parsing.

use super::FragmentSource;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::geometry::Rect;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Reads fragments from one converted-document JSON file.
pub struct JsonFragmentSource {
    path: PathBuf,
}

impl JsonFragmentSource {
    /// Create a source for a converted document on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse fragments out of interchange JSON text.
    ///
    /// Blocks whose lines are all blank are dropped with a debug log;
    /// structural problems (missing `content`, malformed positions) fail
    /// the whole document.
    pub fn parse(text: &str) -> Result<Vec<Fragment>> {
        let file: InterchangeFile = serde_json::from_str(text)?;
        Ok(file
            .content
            .blocks
            .into_iter()
            .filter_map(Block::into_fragment)
            .collect())
    }
}

impl FragmentSource for JsonFragmentSource {
    fn fragments(&mut self) -> Result<Vec<Fragment>> {
        let text = fs::read_to_string(&self.path)?;
        Self::parse(&text)
    }
}

#[derive(Debug, Deserialize)]
struct InterchangeFile {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
struct Block {
    page: u32,
    #[serde(flatten)]
    text: BlockText,
    #[serde(default)]
    position: Option<Rect>,
}

/// The two text shapes converter versions have produced.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BlockText {
    Lines {
        lines: Vec<String>,
    },
    Text {
        text: String,
    },
}

impl Block {
    fn into_fragment(self) -> Option<Fragment> {
        let lines = match self.text {
            BlockText::Lines { lines } => lines,
            BlockText::Text { text } => text.split('\n').map(str::to_string).collect(),
        };
        let lines = trim_blank_edges(lines);
        if lines.is_empty() {
            log::debug!("Dropping blank block on page {}", self.page);
            return None;
        }
        Some(Fragment::new(self.page, lines, self.position))
    }
}

/// Strip leading and trailing blank lines, keeping interior ones.
fn trim_blank_edges(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    let lead = lines.iter().take_while(|line| line.trim().is_empty()).count();
    lines.drain(..lead);
    lines
}
