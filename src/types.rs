// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for po2mo

use crate::error::CompileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default extension of text catalogs.
pub const SOURCE_EXTENSION: &str = "po";

/// Default extension of compiled catalogs.
pub const OUTPUT_EXTENSION: &str = "mo";

/// One source string and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub source_text: String,
    pub translated_text: String,
}

impl TranslationEntry {
    pub fn new(source_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
        }
    }
}

/// Knobs for a compile.
///
/// `Default` reproduces the classic behaviour: translations identical to
/// their source are dropped and the output sits next to the source with a
/// `.mo` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Keep entries whose translation equals the source text.
    ///
    /// Off by default. Dropping them is a size heuristic, not a property of
    /// the binary format, so proper nouns and the like can be kept with this.
    pub keep_identical: bool,
    /// Extension given to the compiled file.
    pub output_extension: String,
    /// Directory for compiled files; `None` writes beside the source.
    pub output_dir: Option<PathBuf>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            keep_identical: false,
            output_extension: OUTPUT_EXTENSION.to_string(),
            output_dir: None,
        }
    }
}

/// Why a compile produced no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoTranslations,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoTranslations => write!(f, "no translations"),
        }
    }
}

/// Result of compiling one source file.
#[derive(Debug)]
pub enum CompileOutcome {
    /// A binary catalog with `entries` records was written to `output`.
    Compiled { entries: usize, output: PathBuf },
    /// Nothing worth writing; no file was created.
    Skipped(SkipReason),
    /// The compile failed; any previous output file is untouched.
    Failed(CompileError),
}

impl CompileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CompileOutcome::Failed(_))
    }

    pub fn status(&self) -> FileStatus {
        match self {
            CompileOutcome::Compiled { .. } => FileStatus::Compiled,
            CompileOutcome::Skipped(_) => FileStatus::Skipped,
            CompileOutcome::Failed(_) => FileStatus::Failed,
        }
    }
}

/// Serializable form of a [`CompileOutcome`] discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Compiled,
    Skipped,
    Failed,
}

/// Counts over a parsed catalog, before filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Records in the catalog, header excluded.
    pub total: usize,
    /// Records that would be written with default options.
    pub translated: usize,
    /// Records with an empty translation.
    pub untranslated: usize,
    /// Records whose translation equals the source text.
    pub identical: usize,
    pub has_header: bool,
}
