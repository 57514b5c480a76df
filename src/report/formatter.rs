// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal formatting for compile results

use crate::batch::{BatchReport, FileResult};
use crate::catalog::Catalog;
use crate::types::FileStatus;
use colored::*;
use std::path::Path;

pub struct ReportFormatter {
    quiet: bool,
}

impl ReportFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// One line for a single-file compile.
    pub fn print_single(&self, result: &FileResult) {
        let source = result.source.display();
        match result.status {
            FileStatus::Compiled => {
                if !self.quiet {
                    let output = result
                        .output
                        .as_deref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    println!(
                        "{} {} -> {} ({} entries)",
                        "compiled".green().bold(),
                        source,
                        output,
                        result.entries
                    );
                }
            }
            FileStatus::Skipped => {
                if !self.quiet {
                    println!(
                        "{} {} ({})",
                        "skipped".yellow().bold(),
                        source,
                        result.reason.as_deref().unwrap_or_default()
                    );
                }
            }
            FileStatus::Failed => {
                eprintln!(
                    "{} {}: {}",
                    "failed".red().bold(),
                    source,
                    result.reason.as_deref().unwrap_or_default()
                );
            }
        }
    }

    pub fn print_batch(&self, report: &BatchReport) {
        if !self.quiet {
            println!("\n{}", "=== TRANSLATION COMPILE SUMMARY ===".bold().cyan());
            println!(
                "Directory: {}  |  Sources: {}",
                report.directory.display(),
                report.sources_found
            );
            println!();

            for result in &report.results {
                self.print_file_result(result, &report.directory);
            }
            println!();
        }

        let failed = if report.failed > 0 {
            report.failed.to_string().red().bold()
        } else {
            report.failed.to_string().normal()
        };
        println!(
            "  Compiled: {}  |  Skipped: {}  |  Failed: {}  |  Entries: {}",
            report.compiled.to_string().green().bold(),
            report.skipped.to_string().yellow(),
            failed,
            report.total_entries
        );
    }

    fn print_file_result(&self, result: &FileResult, base: &Path) {
        let name = result
            .source
            .strip_prefix(base)
            .unwrap_or(&result.source)
            .display()
            .to_string();
        match result.status {
            FileStatus::Compiled => println!(
                "  {:<8} {:<40} {:>6} entries",
                "OK".green(),
                name,
                result.entries
            ),
            FileStatus::Skipped => println!(
                "  {:<8} {:<40} {}",
                "SKIP".yellow(),
                name,
                result.reason.as_deref().unwrap_or_default().dimmed()
            ),
            FileStatus::Failed => println!(
                "  {:<8} {:<40} {}",
                "ERROR".red().bold(),
                name,
                result.reason.as_deref().unwrap_or_default()
            ),
        }
    }

    /// Statistics and header fields of a parsed catalog.
    pub fn print_catalog(&self, source: &Path, catalog: &Catalog) {
        let stats = catalog.stats();
        println!("{}", source.display().to_string().bold());
        println!("  Records: {}", stats.total);
        println!("    Translated: {}", stats.translated.to_string().green());
        println!("    Untranslated: {}", stats.untranslated.to_string().yellow());
        println!("    Same as source: {}", stats.identical);

        if self.quiet {
            return;
        }
        let fields = catalog.header_fields();
        if fields.is_empty() {
            println!("  Header: {}", "none".dimmed());
        } else {
            println!("  Header:");
            for (name, value) in &fields {
                println!("    {}: {}", name, value.dimmed());
            }
        }
    }
}
