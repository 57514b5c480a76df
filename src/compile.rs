// SPDX-License-Identifier: PMPL-1.0-or-later

//! Compile one catalog: read, parse, filter, encode, write.

use crate::catalog::Catalog;
use crate::error::{CompileError, Result};
use crate::mo;
use crate::parser;
use crate::types::{CompileOptions, CompileOutcome, SkipReason};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Compile `source` to the output path derived from `options`.
pub fn compile(source: &Path, options: &CompileOptions) -> CompileOutcome {
    let output = output_path(source, options);
    compile_to(source, &output, options)
}

/// Compile `source` to an explicit `output` path.
///
/// An empty catalog is reported as [`CompileOutcome::Skipped`] and leaves
/// `output` untouched.
pub fn compile_to(source: &Path, output: &Path, options: &CompileOptions) -> CompileOutcome {
    match try_compile(source, output, options) {
        Ok(entries) => CompileOutcome::Compiled {
            entries,
            output: output.to_path_buf(),
        },
        Err(CompileError::EmptyCatalog) => {
            info!(source = %source.display(), "no translations, skipping");
            CompileOutcome::Skipped(SkipReason::NoTranslations)
        }
        Err(err) => CompileOutcome::Failed(err),
    }
}

/// Like [`compile_to`] but with `EmptyCatalog` as an error. Returns the
/// number of entries written.
pub fn try_compile(source: &Path, output: &Path, options: &CompileOptions) -> Result<usize> {
    let catalog = read_catalog(source)?;

    let entries = catalog.translations(options);
    debug!(
        source = %source.display(),
        records = catalog.len(),
        kept = entries.len(),
        "catalog filtered"
    );
    let count = entries.len();
    let bytes = mo::encode(entries)?;
    mo::write_atomic(output, &bytes)?;

    info!(
        output = %output.display(),
        entries = count,
        bytes = bytes.len(),
        "catalog written"
    );
    Ok(count)
}

/// Read and parse a catalog source file.
pub fn read_catalog(source: &Path) -> Result<Catalog> {
    let bytes = fs::read(source).map_err(|e| CompileError::io(source, e))?;
    let catalog = parser::parse_bytes(&bytes)?;

    if let Some(charset) = catalog.charset() {
        if !charset.eq_ignore_ascii_case("UTF-8") && !charset.eq_ignore_ascii_case("utf8") {
            warn!(
                source = %source.display(),
                %charset,
                "header declares a non UTF-8 charset; output is UTF-8"
            );
        }
    }
    Ok(catalog)
}

/// Output path for `source`: same base name with the output extension,
/// beside the source or inside `options.output_dir`.
pub fn output_path(source: &Path, options: &CompileOptions) -> PathBuf {
    let renamed = source.with_extension(&options.output_extension);
    match (&options.output_dir, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}
