// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report printing and export

pub mod formatter;
pub mod output;

pub use formatter::ReportFormatter;
pub use output::{write_report, ReportOutputFormat};
