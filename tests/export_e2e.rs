// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use job_rollup::aggregate;
use job_rollup::cluster::{ClusterResolver, ClusterTables};
use job_rollup::config::options::{ExportFormat, ExportOptions, ViewKind};
use job_rollup::error::RunError;
use job_rollup::file;
use job_rollup::jobs::NormalizedRow;
use job_rollup::report::Reports;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_rollup_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn reports() -> Reports {
    let rows = vec![
        NormalizedRow::new("Driver", "Austin", "TX", 900.0),
        NormalizedRow::new("Driver", "Austin", "TX", 900.0),
        NormalizedRow::new("Cook, Line", "Tulsa", "OK", 400.0),
    ];
    Reports::build(&aggregate::run_all(&rows, &ClusterResolver::new(ClusterTables::new())))
}

#[test]
fn writes_one_file_per_view() {
    let dir = tmp_dir("all");
    let mut export = ExportOptions::default();
    export.set_out_dir(dir.to_str().unwrap());

    let written = file::export_reports(&reports(), &export, &ViewKind::ALL).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["by_location.csv", "by_state.csv", "by_cluster.csv"]);

    let loc = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(loc, "\
Role,Job Count,\"Location (City, State)\",Population
Driver,2,\"Austin, TX\",1800
\"Cook, Line\",1,\"Tulsa, OK\",400
");

    // No distance tables: header only.
    let cl = fs::read_to_string(&written[2]).unwrap();
    assert_eq!(cl.lines().count(), 1);
}

#[test]
fn tsv_without_headers_and_dropped_column() {
    let dir = tmp_dir("tsv");
    let mut export = ExportOptions::default();
    export.set_out_dir(dir.to_str().unwrap());
    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    export.drop_column = Some(3);

    let written = file::export_reports(&reports(), &export, &[ViewKind::State]).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].to_string_lossy().ends_with("by_state.tsv"));
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), "Driver\t2\tTX\nCook, Line\t1\tOK\n");
}

#[test]
fn unwritable_target_reports_export_error() {
    let dir = tmp_dir("blocked");
    let mut export = ExportOptions::default();
    export.set_out_dir(dir.to_str().unwrap());
    // A directory where the file should go.
    fs::create_dir_all(export.path_for(ViewKind::Location)).unwrap();

    let err = file::export_reports(&reports(), &export, &[ViewKind::Location]).unwrap_err();
    assert!(matches!(err.downcast_ref::<RunError>(), Some(RunError::Export { .. })));
}
