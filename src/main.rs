// SPDX-License-Identifier: PMPL-1.0-or-later

//! po2mo: compile translation catalogs into the binary lookup format
//!
//! Compiles a single catalog, or every catalog in a directory, and reports
//! per-file success, skip, or failure.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use po2mo::batch::{self, BatchConfig};
use po2mo::report::{self, ReportFormatter, ReportOutputFormat};
use po2mo::types::{CompileOptions, OUTPUT_EXTENSION, SOURCE_EXTENSION};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "po2mo")]
#[command(version)]
#[command(about = "Compile translation catalogs into the binary lookup format")]
#[command(long_about = None)]
struct Cli {
    /// More diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print failures and the final counts
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile one catalog, or every catalog in a directory
    Compile {
        /// Catalog file or directory of catalogs
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Write compiled catalogs here instead of beside their sources
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Extension of source catalogs when compiling a directory
        #[arg(long, default_value = SOURCE_EXTENSION)]
        extension: String,

        /// Extension of compiled catalogs
        #[arg(long, default_value = OUTPUT_EXTENSION)]
        output_extension: String,

        /// Search subdirectories too
        #[arg(short, long)]
        recursive: bool,

        /// Keep translations that are identical to their source text
        #[arg(long)]
        keep_identical: bool,

        /// Save a JSON or YAML report to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Report format (default: from the report file extension)
        #[arg(long, value_enum)]
        format: Option<ReportOutputFormat>,
    },

    /// Parse a catalog and show its statistics without writing anything
    Check {
        /// Catalog file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("po2mo={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let formatter = ReportFormatter::new(cli.quiet);

    match cli.command {
        Commands::Compile {
            path,
            output_dir,
            extension,
            output_extension,
            recursive,
            keep_identical,
            report: report_path,
            format,
        } => {
            let options = CompileOptions {
                keep_identical,
                output_extension,
                output_dir,
            };

            let batch_report = if path.is_dir() {
                let config = BatchConfig {
                    directory: path,
                    recursive,
                    extension,
                    options,
                };
                let batch_report = batch::run(&config)?;
                if batch_report.sources_found == 0 {
                    anyhow::bail!(
                        "no .{} files found in {}",
                        config.extension,
                        config.directory.display()
                    );
                }
                formatter.print_batch(&batch_report);
                batch_report
            } else {
                if recursive {
                    anyhow::bail!("--recursive needs a directory, got {}", path.display());
                }
                if extension != SOURCE_EXTENSION {
                    anyhow::bail!("--extension needs a directory, got {}", path.display());
                }
                let batch_report = batch::run_file(&path, &options);
                for result in &batch_report.results {
                    formatter.print_single(result);
                }
                batch_report
            };

            if let Some(report_path) = report_path {
                let format = format.unwrap_or_else(|| ReportOutputFormat::for_path(&report_path));
                report::write_report(&batch_report, &report_path, format)?;
                if !cli.quiet {
                    println!("Report saved to: {}", report_path.display());
                }
            }

            Ok(ExitCode::from(batch_report.exit_code()))
        }

        Commands::Check { file } => {
            let catalog = po2mo::compile::read_catalog(&file)
                .with_context(|| format!("checking {}", file.display()))?;
            formatter.print_catalog(&file, &catalog);
            Ok(ExitCode::SUCCESS)
        }
    }
}
