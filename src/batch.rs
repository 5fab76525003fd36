//! Batch processing of converted report documents.
//!
//! The batch layer turns converted-document JSON files into organized
//! output files: it discovers inputs, runs the organizing pipeline per
//! file, and writes one envelope per document. A failing document is
//! logged and counted; it never aborts the run.

use crate::config::OrganizeConfig;
use crate::document::WorkOrder;
use crate::error::Result;
use crate::layout::sort_fragments;
use crate::metadata::{Envelope, FileMetadata};
use crate::source::{FragmentSource, JsonFragmentSource};
use crate::summary::Summary;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File stems that collide with bookkeeping files kept next to the
/// documents; inputs using them are rejected during discovery.
const RESERVED_STEMS: &[&str] = &[
    "index", "config", "db", "log", "error", "temp", "backup", "label", "labels", "json",
];

/// Outcome of processing one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Document organized (and written when an output directory is set).
    Success,
    /// Output already existed and overwriting was not requested.
    Skipped,
    /// The document failed to load or organize.
    Failed,
}

impl ProcessStatus {
    /// Short lowercase name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::Success => "success",
            ProcessStatus::Skipped => "skipped",
            ProcessStatus::Failed => "failed",
        }
    }
}

/// Per-file results of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// One entry per processed file, in processing order.
    pub results: Vec<(PathBuf, ProcessStatus)>,
}

impl BatchOutcome {
    fn count(&self, status: ProcessStatus) -> usize {
        self.results.iter().filter(|(_, s)| *s == status).count()
    }

    /// Number of successfully organized documents.
    pub fn successes(&self) -> usize {
        self.count(ProcessStatus::Success)
    }

    /// Number of documents skipped because their output already existed.
    pub fn skips(&self) -> usize {
        self.count(ProcessStatus::Skipped)
    }

    /// Number of documents that failed.
    pub fn failures(&self) -> usize {
        self.count(ProcessStatus::Failed)
    }
}

/// Organizes converted documents and writes output envelopes.
pub struct Organizer {
    config: OrganizeConfig,
    output_dir: Option<PathBuf>,
    overwrite: bool,
    include_summary: bool,
}

impl Organizer {
    /// Create an organizer with no output directory; documents are
    /// organized in memory only until [`with_output_dir`](Self::with_output_dir)
    /// is set.
    pub fn new(config: OrganizeConfig) -> Self {
        Self {
            config,
            output_dir: None,
            overwrite: false,
            include_summary: false,
        }
    }

    /// Write organized envelopes to `dir`, one `{stem}.json` per input.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Overwrite existing output files instead of skipping their inputs.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Include the action summary in every envelope.
    pub fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }

    /// Organize one converted document.
    ///
    /// Returns `Ok(None)` when the output file already exists and
    /// overwriting is off. `base_dir` only affects the relative source
    /// path recorded in the envelope metadata.
    pub fn process_file(&self, path: &Path, base_dir: Option<&Path>) -> Result<Option<Envelope>> {
        log::info!("Processing report file: {}", path.display());

        if let Some(output_dir) = &self.output_dir {
            let output = output_path(output_dir, path);
            if !self.overwrite && output.exists() {
                log::info!(
                    "Skipping {} - output file {} already exists",
                    path.display(),
                    output.display()
                );
                return Ok(None);
            }
        }

        let mut source = JsonFragmentSource::new(path);
        let mut fragments = source.fragments()?;
        sort_fragments(&mut fragments);
        log::info!("Loaded {} fragments from {}", fragments.len(), path.display());

        let metadata = FileMetadata::collect(path, base_dir, &fragments)?;
        let document = WorkOrder::organize(&fragments, &self.config);
        let summary = self
            .include_summary
            .then(|| Summary::project(&document, &self.config.vocabulary));
        let envelope = Envelope { metadata, document, summary };

        if let Some(output_dir) = &self.output_dir {
            fs::create_dir_all(output_dir)?;
            let output = output_path(output_dir, path);
            fs::write(&output, envelope.to_json()?)?;
            log::info!("Saved organized document to {}", output.display());
        }

        Ok(Some(envelope))
    }

    /// Process a list of files, collecting per-file outcomes.
    ///
    /// A failing document is logged and recorded as
    /// [`ProcessStatus::Failed`]; the run continues with the next file.
    /// `on_file` is called after each file with its status, for progress
    /// reporting.
    pub fn process_all(
        &self,
        files: &[PathBuf],
        base_dir: Option<&Path>,
        mut on_file: impl FnMut(&Path, ProcessStatus),
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for path in files {
            let status = match self.process_file(path, base_dir) {
                Ok(Some(_)) => ProcessStatus::Success,
                Ok(None) => ProcessStatus::Skipped,
                Err(err) => {
                    log::error!("Failed to process {}: {}", path.display(), err);
                    ProcessStatus::Failed
                },
            };
            on_file(path, status);
            outcome.results.push((path.clone(), status));
        }

        log::info!("Processed {} documents in total:", outcome.results.len());
        log::info!("  - Successfully organized: {}", outcome.successes());
        log::info!("  - Skipped (already exist): {}", outcome.skips());
        log::info!("  - Failed: {}", outcome.failures());

        outcome
    }
}

/// Output file path for one input: `{stem}.json` in the output directory.
fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.json", stem))
}

/// Whether a path's stem is reserved for bookkeeping files.
fn is_reserved_stem(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .is_some_and(|stem| RESERVED_STEMS.contains(&stem.as_str()))
}

/// Detect the converted documents to process for one run.
///
/// Three cases, mirroring how datasets are laid out in the field:
/// 1. `input_path` is a file: it alone is processed (it must be a `.json`
///    document with an allowed stem).
/// 2. Loose documents sitting directly in `base_dir` are picked up first.
/// 3. Documents in `input_path` follow, searched recursively on request.
///
/// Inputs with reserved stems are rejected with an error log. Duplicates
/// between the base and input directories are processed once. A missing
/// input directory is created so the expected layout exists for the next
/// run.
pub fn discover_inputs(base_dir: &Path, input_path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if input_path.is_file() {
        if !input_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            log::error!("{} is not a converted .json document", input_path.display());
            return Ok(Vec::new());
        }
        if is_reserved_stem(input_path) {
            log::error!(
                "'{}' uses a reserved filename; rename the file to continue",
                input_path.display()
            );
            return Ok(Vec::new());
        }
        return Ok(vec![input_path.to_path_buf()]);
    }

    let mut files = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    if base_dir.is_dir() && base_dir != input_path {
        log::info!("Looking for converted documents in base directory: {}", base_dir.display());
        let found = collect_documents(&base_dir.join("*.json"), &mut files, &mut seen)?;
        if found > 0 {
            log::info!("Found {} documents in base directory", found);
        }
    }

    if input_path.is_dir() {
        log::info!("Looking for converted documents in input directory: {}", input_path.display());
        let pattern = if recursive {
            input_path.join("**").join("*.json")
        } else {
            input_path.join("*.json")
        };
        let found = collect_documents(&pattern, &mut files, &mut seen)?;
        if found > 0 {
            log::info!("Found {} documents in input directory", found);
        }
    } else if !input_path.exists() {
        log::error!("Input path {} does not exist; creating it", input_path.display());
        fs::create_dir_all(input_path)?;
    }

    Ok(files)
}

/// Glob for documents, filtering reserved stems and already-seen paths.
fn collect_documents(
    pattern: &Path,
    files: &mut Vec<PathBuf>,
    seen: &mut HashSet<PathBuf>,
) -> Result<usize> {
    let mut found = 0;
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                log::warn!("Skipping unreadable path: {}", err);
                continue;
            },
        };
        if !path.is_file() {
            continue;
        }
        if is_reserved_stem(&path) {
            log::error!(
                "Skipping '{}' - filename is reserved for system files",
                path.display()
            );
            continue;
        }
        if seen.insert(path.clone()) {
            files.push(path);
            found += 1;
        }
    }
    Ok(found)
}
