// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for a single catalog compile.
//!
//! Every variant is scoped to one source file: a batch keeps going after any
//! of them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    /// The source text could not be read as a sequence of records.
    #[error("malformed source at line {line}: {reason}")]
    MalformedSource { line: usize, reason: String },

    /// Nothing left to write after the header and untranslated entries
    /// were removed. Callers report this as a skip.
    #[error("no translations")]
    EmptyCatalog,

    /// Reading the source or writing the output failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The encoded catalog does not fit the 32-bit offsets of the format.
    #[error("catalog too large for 32-bit offsets ({bytes} bytes)")]
    Oversized { bytes: u64 },
}

impl CompileError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CompileError::MalformedSource {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompileError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-friendly label used in batch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::MalformedSource { .. } => "malformed_source",
            CompileError::EmptyCatalog => "empty_catalog",
            CompileError::Io { .. } => "io",
            CompileError::Oversized { .. } => "oversized",
        }
    }
}

/// Result type alias used throughout the library.
pub type Result<T> = std::result::Result<T, CompileError>;
