// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch: compile every catalog in a directory
//!
//! Walks a directory for source catalogs, compiles each one independently
//! (in parallel), and aggregates the outcomes into a summary report sorted
//! by source path. One bad file never stops the others.

use crate::compile;
use crate::types::{CompileOptions, CompileOutcome, FileStatus, SOURCE_EXTENSION};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the source catalogs
    pub directory: PathBuf,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Extension identifying source catalogs, without the dot
    pub extension: String,
    pub options: CompileOptions,
}

impl BatchConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            recursive: false,
            extension: SOURCE_EXTENSION.to_string(),
            options: CompileOptions::default(),
        }
    }
}

/// Outcome for a single source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub source: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl FileResult {
    fn from_outcome(source: PathBuf, outcome: CompileOutcome) -> Self {
        let status = outcome.status();
        match outcome {
            CompileOutcome::Compiled { entries, output } => FileResult {
                source,
                status,
                output: Some(output),
                entries,
                reason: None,
                error_kind: None,
            },
            CompileOutcome::Skipped(reason) => FileResult {
                source,
                status,
                output: None,
                entries: 0,
                reason: Some(reason.to_string()),
                error_kind: None,
            },
            CompileOutcome::Failed(err) => FileResult {
                source,
                status,
                output: None,
                entries: 0,
                reason: Some(err.to_string()),
                error_kind: Some(err.kind().to_string()),
            },
        }
    }
}

/// Complete batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub created_at: String,
    pub directory: PathBuf,
    pub sources_found: usize,
    pub compiled: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total_entries: usize,
    pub results: Vec<FileResult>,
}

impl BatchReport {
    /// Process exit status: non-zero when any compile failed.
    /// Skips are not failures.
    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }
}

/// Find all source catalogs under the given directory
pub fn discover_sources(directory: &Path, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        anyhow::bail!("Not a directory: {}", directory.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut sources = Vec::new();
    for entry in WalkDir::new(directory).max_depth(max_depth) {
        let entry = entry.with_context(|| format!("walking {}", directory.display()))?;
        let path = entry.path();
        // Symlinked catalogs count; links to directories do not. A dangling
        // link is kept so its compile reports the I/O failure.
        let is_candidate = entry.file_type().is_file()
            || (entry.path_is_symlink() && !path.is_dir());
        let matches = is_candidate
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false);
        if matches {
            sources.push(path.to_path_buf());
        }
    }

    sources.sort();
    Ok(sources)
}

/// Compile every catalog in the configured directory
pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    let sources = discover_sources(&config.directory, &config.extension, config.recursive)?;

    let results: Vec<FileResult> = sources
        .par_iter()
        .map(|source| compile_one(source, &config.options))
        .collect();

    Ok(summarize(config.directory.clone(), results))
}

/// Compile a single catalog and report it in the same shape as a batch.
///
/// The report's `directory` is the source's parent.
pub fn run_file(source: &Path, options: &CompileOptions) -> BatchReport {
    let directory = match source.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    summarize(directory, vec![compile_one(source, options)])
}

fn compile_one(source: &Path, options: &CompileOptions) -> FileResult {
    let outcome = compile::compile(source, options);
    if let CompileOutcome::Failed(err) = &outcome {
        warn!(source = %source.display(), error = %err, "compile failed");
    }
    FileResult::from_outcome(source.to_path_buf(), outcome)
}

fn summarize(directory: PathBuf, results: Vec<FileResult>) -> BatchReport {
    let count = |status: FileStatus| results.iter().filter(|r| r.status == status).count();
    let compiled = count(FileStatus::Compiled);
    let skipped = count(FileStatus::Skipped);
    let failed = count(FileStatus::Failed);
    let total_entries = results.iter().map(|r| r.entries).sum();

    BatchReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        directory,
        sources_found: results.len(),
        compiled,
        skipped,
        failed,
        total_entries,
        results,
    }
}
