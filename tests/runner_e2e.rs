// tests/runner_e2e.rs
use std::fs;
use std::path::PathBuf;

use job_rollup::config::options::{RunOptions, ViewKind, ViewSelector};
use job_rollup::error::RunError;
use job_rollup::progress::{CliProgress, NullProgress, Progress};
use job_rollup::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_rollup_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// jobs.csv + rules + a TX distance table under `dir`.
fn fixture(dir: &PathBuf) -> RunOptions {
    fs::write(dir.join("jobs.csv"), "\
city,state,title,population,advertiser
Round Rock,Texas,CDL-A Truck Driver,\"120,000\",acme
Austin,TX,Line Cook,950000.7,
Austin,TX,Class A Driver - OTR,950000,acme
Tulsa,OK,Line Cook,not a number,
Georgetown,TX,Warehouse Associate,70000,
").unwrap();

    fs::write(dir.join("rules.csv"), "\
Advertiser,Search For,If in Title
acme,\"cdl, class a\",Truck Driver
default_advertiser,cook,Cook
").unwrap();

    fs::create_dir_all(dir.join("cities")).unwrap();
    fs::write(dir.join("cities").join("TX_distances.csv"), "\
City 1,City 2,Distance
Austin,Round Rock,19.4
Austin,Georgetown,26.9
").unwrap();

    RunOptions {
        dataset: dir.join("jobs.csv"),
        rules: dir.join("rules.csv"),
        cities_dir: dir.join("cities"),
        ..RunOptions::default()
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    steps: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn step_done(&mut self, what: &str) { self.steps.push(what.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn full_run_builds_all_three_views() {
    let dir = tmp_dir("full");
    let opts = fixture(&dir);

    let reports = runner::run(&opts, Some(&mut NullProgress)).unwrap();

    assert_eq!(reports.location.rows, vec![
        vec!["Truck Driver", "1", "Round Rock, TX", "120000"],
        vec!["Cook", "1", "Austin, TX", "950000.7"],
        vec!["Truck Driver", "1", "Austin, TX", "950000"],
        vec!["Cook", "1", "Tulsa, OK", "0"],
        vec!["Warehouse Associate", "1", "Georgetown, TX", "70000"],
    ]);

    assert_eq!(reports.state.rows, vec![
        vec!["Truck Driver", "2", "TX", "2"],
        vec!["Cook", "1", "TX", "1"],
        vec!["Cook", "1", "OK", "1"],
        vec!["Warehouse Associate", "1", "TX", "1"],
    ]);

    // Tulsa has no OK table and drops out of the cluster view.
    assert_eq!(reports.cluster.rows, vec![
        vec!["Truck Driver", "2", "Austin_TX", "1070000"],
        vec!["Cook", "1", "Austin_TX", "950000.7"],
        vec!["Warehouse Associate", "1", "Austin_TX", "70000"],
    ]);
}

#[test]
fn single_view_leaves_others_empty() {
    let dir = tmp_dir("single");
    let mut opts = fixture(&dir);
    opts.views = ViewSelector::One(ViewKind::State);

    let reports = runner::run(&opts, None).unwrap();
    assert_eq!(reports.state.rows.len(), 4);
    assert!(reports.location.rows.is_empty());
    assert!(reports.cluster.rows.is_empty());
}

#[test]
fn missing_rules_and_cities_still_run() {
    let dir = tmp_dir("bare");
    let mut opts = fixture(&dir);
    opts.rules = dir.join("nope.csv");
    opts.cities_dir = dir.join("no_cities");

    let reports = runner::run(&opts, None).unwrap();
    // Titles pass through untouched.
    assert_eq!(reports.location.rows[0][0], "CDL-A Truck Driver");
    assert!(reports.cluster.rows.is_empty());
}

#[test]
fn missing_dataset_is_fatal() {
    let dir = tmp_dir("missing");
    let opts = RunOptions {
        dataset: dir.join("absent.csv"),
        rules: dir.join("rules.csv"),
        cities_dir: dir.join("cities"),
        ..RunOptions::default()
    };

    let mut rec = Recorder::default();
    let err = runner::run(&opts, Some(&mut rec)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::DatasetUnavailable { .. })
    ));
    // Nothing after the dataset was attempted.
    assert!(rec.steps.is_empty());
    assert!(rec.finished);
}

#[test]
fn progress_sees_every_step() {
    let dir = tmp_dir("progress");
    let opts = fixture(&dir);

    let mut rec = Recorder::default();
    runner::run(&opts, Some(&mut rec)).unwrap();
    assert_eq!(rec.total, 4);
    assert_eq!(rec.steps.len(), 4);
    assert!(rec.steps[0].starts_with("Loaded 5 row(s)"));
    assert!(rec.finished);
}

#[test]
fn loading_reports_each_input_to_a_progress_sink() {
    let dir = tmp_dir("load_inputs");
    let opts = fixture(&dir);

    let mut rec = Recorder::default();
    let inputs = runner::load_inputs(&opts, Some(&mut rec)).unwrap();
    assert_eq!(inputs.rows.len(), 5);
    assert_eq!(rec.steps.len(), 3);

    // The sink is still usable after the run borrowed it.
    let mut cli = CliProgress::default();
    runner::run(&opts, Some(&mut cli)).unwrap();
    runner::run(&opts, Some(&mut cli)).unwrap();
}

#[test]
fn oversized_and_decimal_populations_survive_a_run() {
    let dir = tmp_dir("big_population");
    let mut opts = fixture(&dir);
    fs::write(&opts.dataset, "\
city,state,title,population
Austin,TX,Driver,99999999999999999999
Austin,TX,Driver,99999999999999999999
Kyle,TX,Cook,99.9
Kyle,TX,Cook,99.9
").unwrap();
    opts.rules = dir.join("none.csv");

    let reports = runner::run(&opts, Some(&mut CliProgress::default())).unwrap();
    assert_eq!(reports.location.rows, vec![
        vec!["Driver", "2", "Austin, TX", "200000000000000000000"],
        vec!["Cook", "2", "Kyle, TX", "199.8"],
    ]);
}
