// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for compiling a directory of catalogs

use po2mo::batch::{self, BatchConfig};
use po2mo::report::{write_report, ReportOutputFormat};
use po2mo::types::{CompileOptions, FileStatus};
use std::fs;
use tempfile::TempDir;

const TRANSLATED: &str = "msgid \"Hello\"\nmsgstr \"Ciao\"\n\nmsgid \"Bye\"\nmsgstr \"Ciao ciao\"\n";
const UNTRANSLATED: &str = "msgid \"Hello\"\nmsgstr \"\"\n";
const BROKEN: &str = "msgid \"Hello\"\nthis is not a catalog line\n";

#[test]
fn test_batch_empty_directory() {
    let dir = TempDir::new().unwrap();
    let report = batch::run(&BatchConfig::new(dir.path())).expect("batch should succeed");
    assert_eq!(report.sources_found, 0);
    assert!(report.results.is_empty());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_batch_isolates_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("it_IT.po"), TRANSLATED).unwrap();
    fs::write(dir.path().join("fr_FR.po"), UNTRANSLATED).unwrap();
    fs::write(dir.path().join("de_DE.po"), BROKEN).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

    let report = batch::run(&BatchConfig::new(dir.path())).expect("batch should succeed");
    assert_eq!(report.sources_found, 3);
    assert_eq!(report.compiled, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total_entries, 2);
    assert_eq!(report.exit_code(), 1);

    // Sorted by source path.
    let names: Vec<String> = report
        .results
        .iter()
        .map(|r| r.source.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["de_DE.po", "fr_FR.po", "it_IT.po"]);

    assert_eq!(report.results[0].status, FileStatus::Failed);
    assert_eq!(report.results[0].error_kind.as_deref(), Some("malformed_source"));
    assert_eq!(report.results[1].status, FileStatus::Skipped);
    assert_eq!(report.results[2].status, FileStatus::Compiled);

    assert!(dir.path().join("it_IT.mo").is_file());
    assert!(!dir.path().join("fr_FR.mo").exists());
    assert!(!dir.path().join("de_DE.mo").exists());
}

#[test]
fn test_skips_do_not_fail_the_batch() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("it_IT.po"), TRANSLATED).unwrap();
    fs::write(dir.path().join("fr_FR.po"), UNTRANSLATED).unwrap();

    let report = batch::run(&BatchConfig::new(dir.path())).unwrap();
    assert_eq!(report.failed, 0);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_batch_recursion_is_opt_in() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("it_IT.po"), TRANSLATED).unwrap();
    fs::write(dir.path().join("nested/ja_JP.PO"), TRANSLATED).unwrap();

    let flat = batch::run(&BatchConfig::new(dir.path())).unwrap();
    assert_eq!(flat.sources_found, 1);

    let mut config = BatchConfig::new(dir.path());
    config.recursive = true;
    let deep = batch::run(&config).unwrap();
    assert_eq!(deep.sources_found, 2);
    assert!(dir.path().join("nested/ja_JP.mo").is_file());
}

#[test]
fn test_batch_not_a_directory() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("it_IT.po");
    fs::write(&file_path, TRANSLATED).unwrap();

    let result = batch::run(&BatchConfig::new(&file_path));
    assert!(result.is_err(), "batch should error when given a file");
}

#[test]
fn test_batch_write_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("it_IT.po"), TRANSLATED).unwrap();
    fs::write(dir.path().join("de_DE.po"), BROKEN).unwrap();
    let report = batch::run(&BatchConfig::new(dir.path())).unwrap();

    let json_path = dir.path().join("reports/summary.json");
    write_report(&report, &json_path, ReportOutputFormat::Json).expect("json report");
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).expect("valid JSON");
    assert_eq!(parsed["compiled"], 1);
    assert_eq!(parsed["failed"], 1);
    assert_eq!(parsed["results"][0]["status"], "failed");
    assert_eq!(parsed["results"][1]["status"], "compiled");
    assert!(parsed["results"][1].get("error_kind").is_none());

    let yaml_path = dir.path().join("summary.yaml");
    write_report(&report, &yaml_path, ReportOutputFormat::for_path(&yaml_path)).expect("yaml report");
    let yaml = fs::read_to_string(&yaml_path).unwrap();
    assert!(yaml.contains("compiled: 1"));
}

#[cfg(unix)]
#[test]
fn test_batch_compiles_symlinked_catalogs() {
    let dir = TempDir::new().unwrap();
    let shared = TempDir::new().unwrap();
    let target = shared.path().join("it_IT.po");
    fs::write(&target, TRANSLATED).unwrap();
    std::os::unix::fs::symlink(&target, dir.path().join("it_IT.po")).unwrap();
    std::os::unix::fs::symlink(shared.path(), dir.path().join("linked-dir.po")).unwrap();

    let report = batch::run(&BatchConfig::new(dir.path())).unwrap();
    assert_eq!(report.sources_found, 1, "directory links are not catalogs");
    assert_eq!(report.compiled, 1);
    assert!(dir.path().join("it_IT.mo").is_file());
}

#[cfg(unix)]
#[test]
fn test_batch_reports_dangling_symlink_as_failure() {
    let dir = TempDir::new().unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone.po"), dir.path().join("de_DE.po")).unwrap();

    let report = batch::run(&BatchConfig::new(dir.path())).unwrap();
    assert_eq!(report.sources_found, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.results[0].error_kind.as_deref(), Some("io"));
}

#[test]
fn test_single_file_report_has_one_result() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("it_IT.po");
    fs::write(&source, TRANSLATED).unwrap();

    let report = batch::run_file(&source, &CompileOptions::default());
    assert_eq!(report.directory, dir.path());
    assert_eq!(report.sources_found, 1);
    assert_eq!(report.compiled, 1);
    assert_eq!(report.total_entries, 2);
    assert_eq!(report.results[0].source, source);
    assert_eq!(report.results[0].output.as_deref(), Some(dir.path().join("it_IT.mo").as_path()));

    let json_path = dir.path().join("single.json");
    write_report(&report, &json_path, ReportOutputFormat::Json).expect("json report");
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).expect("valid JSON");
    assert_eq!(parsed["sources_found"], 1);
    assert_eq!(parsed["results"][0]["status"], "compiled");
}

#[test]
fn test_single_file_failure_sets_exit_code() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("de_DE.po");
    fs::write(&source, BROKEN).unwrap();

    let report = batch::run_file(&source, &CompileOptions::default());
    assert_eq!(report.failed, 1);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.results[0].error_kind.as_deref(), Some("malformed_source"));
}
