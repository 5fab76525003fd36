//! Source provenance and the written output envelope.
//!
//! Every organized document is written together with metadata describing
//! the converted file it came from, so downstream consumers can detect
//! stale outputs (content hash) and trace records back to their source.

use crate::document::WorkOrder;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::summary::Summary;
use chrono::Local;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Provenance recorded alongside every organized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Source file name.
    pub filename: String,
    /// Source path, relative to the batch base directory when the file
    /// lives under it, absolute otherwise.
    pub file_path: String,
    /// Hex-encoded SHA-256 of the source file bytes.
    pub file_hash: String,
    /// Local processing timestamp, RFC 3339.
    pub processed_date: String,
    /// Number of distinct pages fragments were extracted from.
    pub page_count: usize,
}

impl FileMetadata {
    /// Gather metadata for one source file and its extracted fragments.
    pub fn collect(path: &Path, base_dir: Option<&Path>, fragments: &[Fragment]) -> Result<Self> {
        let bytes = fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_path = match base_dir.and_then(|base| path.strip_prefix(base).ok()) {
            Some(relative) => relative.display().to_string(),
            None => path.display().to_string(),
        };
        Ok(FileMetadata {
            filename,
            file_path,
            file_hash: sha256_hex(&bytes),
            processed_date: Local::now().to_rfc3339(),
            page_count: page_count(fragments),
        })
    }
}

/// Hex-encoded SHA-256 digest of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

/// Count the distinct page numbers among a fragment run.
pub fn page_count(fragments: &[Fragment]) -> usize {
    fragments.iter().map(|f| f.page).collect::<HashSet<_>>().len()
}

/// The envelope written for one organized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Source provenance.
    pub metadata: FileMetadata,
    /// The organized document hierarchy.
    pub document: WorkOrder,
    /// Action summary, present when projection was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl Envelope {
    /// Serialize the envelope as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
