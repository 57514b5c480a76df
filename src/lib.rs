// SPDX-License-Identifier: PMPL-1.0-or-later

//! po2mo: translation catalog compiler.
//!
//! Turns line-oriented `msgid`/`msgstr` text catalogs into the compact binary
//! lookup format read by gettext-compatible runtimes.
//!
//! PIPELINE:
//! 1. **Parser**: a forward line scan into an in-memory [`Catalog`].
//! 2. **Filter**: the header record and untranslated entries are removed.
//! 3. **Writer**: entries sorted by raw bytes, laid out and written atomically.
//!
//! [`batch`] runs the pipeline over a directory of catalogs and aggregates
//! the per-file outcomes.

pub mod batch;
pub mod catalog;
pub mod compile;
pub mod error;
pub mod mo;
pub mod parser;
pub mod report;
pub mod types;

pub use catalog::Catalog;
pub use compile::{compile, compile_to};
pub use error::{CompileError, Result};
pub use types::{CompileOptions, CompileOutcome, SkipReason, TranslationEntry};
