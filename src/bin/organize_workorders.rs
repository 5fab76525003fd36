//! Organize converted work-order reports into structured JSON documents.
//!
//! Reads the converted-document JSON files produced by the extraction
//! step, organizes each into the report hierarchy, and writes one output
//! file per document. Inputs come from the dataset layout
//! (`{base}/converted` by default) or from explicit paths.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use workorder_oxide::batch::{discover_inputs, Organizer};
use workorder_oxide::config::OrganizeConfig;
use workorder_oxide::logging;
use workorder_oxide::vocabulary::Vocabulary;

/// Convert extracted report fragments to organized JSON documents.
#[derive(Debug, Parser)]
#[command(name = "organize_workorders", version, about)]
struct Args {
    /// Path to a converted .json document or a directory. A directory is
    /// used as the base directory unless --base-dir is set, in which case
    /// it becomes the input directory.
    path: Option<PathBuf>,

    /// Base dataset directory (default: dataset)
    #[arg(short = 'd', long)]
    base_dir: Option<PathBuf>,

    /// Input document or directory (default: {base-dir}/converted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory for organized documents (default: {base-dir}/organized)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for log files (default: {base-dir}/log)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Recursively search the input directory
    #[arg(short, long)]
    recursive: bool,

    /// Limit the number of documents processed
    #[arg(short, long)]
    limit: Option<usize>,

    /// Overwrite existing organized documents
    #[arg(long)]
    overwrite: bool,

    /// Include the action summary in every organized document
    #[arg(long)]
    summary: bool,

    /// JSON file overriding the built-in header vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

/// Apply the positional-path convenience: a file is the input document, a
/// directory is the base directory unless one was given explicitly. A path
/// that does not exist is reported and ignored so the defaults apply.
fn resolve_positional(args: &mut Args) {
    if let Some(path) = args.path.take() {
        if path.is_file() {
            args.input = Some(path);
        } else if path.is_dir() {
            if args.base_dir.is_none() {
                args.base_dir = Some(path);
            } else {
                args.input = Some(path);
            }
        } else {
            eprintln!("Path {} does not exist; using the default locations", path.display());
        }
    }
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    resolve_positional(&mut args);

    let base_dir = args.base_dir.clone().unwrap_or_else(|| PathBuf::from("dataset"));
    let input_path = args.input.clone().unwrap_or_else(|| base_dir.join("converted"));
    let output_dir = args.output.clone().unwrap_or_else(|| base_dir.join("organized"));
    let log_dir = args.log_dir.clone().unwrap_or_else(|| base_dir.join("log"));

    let log_path = logging::init(&log_dir)
        .with_context(|| format!("failed to set up logging under {}", log_dir.display()))?;

    log::info!("Base directory: {}", base_dir.display());
    log::info!("Input path: {}", input_path.display());
    log::info!("Output directory: {}", output_dir.display());
    log::info!("Log file: {}", log_path.display());
    log::info!("Overwrite existing files: {}", args.overwrite);

    let mut config = OrganizeConfig::default();
    if let Some(vocabulary_path) = &args.vocabulary {
        let vocabulary = Vocabulary::from_path(vocabulary_path)
            .with_context(|| format!("failed to load vocabulary from {}", vocabulary_path.display()))?;
        config = config.with_vocabulary(vocabulary);
    }

    let organizer = Organizer::new(config)
        .with_output_dir(output_dir.clone())
        .with_overwrite(args.overwrite)
        .with_summary(args.summary);

    let mut files = discover_inputs(&base_dir, &input_path, args.recursive)
        .context("input discovery failed")?;

    if let Some(limit) = args.limit {
        if files.len() > limit {
            log::info!("Limiting to {} files (out of {} detected)", limit, files.len());
            files.truncate(limit);
        }
    }

    if files.is_empty() {
        log::info!("No converted documents found to process");
        return Ok(());
    }

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓▒░  "),
    );

    let outcome = organizer.process_all(&files, Some(&base_dir), |path, _status| {
        if let Some(name) = path.file_name() {
            bar.set_message(name.to_string_lossy().into_owned());
        }
        bar.inc(1);
    });
    bar.finish_and_clear();

    if outcome.successes() > 0 {
        log::info!("Output saved to {}", output_dir.display());
    }

    Ok(())
}
