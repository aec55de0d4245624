// src/runner.rs
use std::error::Error;

use crate::{
    aggregate::{self, Aggregates},
    cluster::{ClusterResolver, ClusterTables},
    config::options::{RunOptions, ViewKind, ViewSelector},
    jobs::{self, NormalizedRow},
    normalize::RoleRules,
    progress::Progress,
    report::Reports,
    store,
};

/// Everything one run reads, loaded once up front.
pub struct RunInputs {
    pub rows: Vec<NormalizedRow>,
    pub resolver: ClusterResolver,
}

/// Load dataset, rule table and distance tables; normalize every row.
/// The dataset goes first: if it is unavailable nothing else is touched.
pub fn load_inputs(
    run: &RunOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunInputs, Box<dyn Error>> {
    let ds = store::load_dataset(&run.dataset)?;
    let raw = jobs::rows_from_dataset(&ds, &run.advertiser);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Loaded {} row(s) from {}", raw.len(), run.dataset.display()));
    }

    let rules = RoleRules::load(&run.rules);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Loaded {} role rule(s)", rules.len()));
    }

    let tables = ClusterTables::load_dir(&run.cities_dir);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(&format!("Loaded distance tables for {} state(s)", tables.len()));
    }

    Ok(RunInputs {
        rows: jobs::normalize_rows(&raw, &rules),
        resolver: ClusterResolver::new(tables),
    })
}

/// Build the selected views. Unselected views stay empty.
pub fn aggregate_views(inputs: &RunInputs, views: &ViewSelector) -> Aggregates {
    let rows = &inputs.rows;
    match views {
        ViewSelector::All => aggregate::run_all(rows, &inputs.resolver),
        ViewSelector::One(ViewKind::Location) => Aggregates {
            location: aggregate::location::aggregate(rows),
            ..Aggregates::default()
        },
        ViewSelector::One(ViewKind::State) => Aggregates {
            state: aggregate::state::aggregate(rows),
            ..Aggregates::default()
        },
        ViewSelector::One(ViewKind::Cluster) => Aggregates {
            cluster: aggregate::cluster::aggregate(rows, &inputs.resolver),
            ..Aggregates::default()
        },
    }
}

/// Top-level: load, normalize, aggregate, flatten. No output IO.
pub fn run(
    run: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Reports, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(4);
    }

    let result = load_inputs(run, progress.as_deref_mut()).map(|inputs| {
        let agg = aggregate_views(&inputs, &run.views);
        logf!(
            "Run: rows={} location={} state={} cluster={}",
            inputs.rows.len(), agg.location.len(), agg.state.len(), agg.cluster.len()
        );
        Reports::build(&agg)
    });

    if let Err(e) = &result {
        loge!("Run: {}", e);
    }
    if let Some(p) = progress.as_deref_mut() {
        match &result {
            Ok(_) => p.step_done("Built views"),
            Err(e) => p.log(&format!("Run failed: {e}")),
        }
        p.finish();
    }
    result
}
