// src/report.rs
//
// Flattens finished groups into display/export tables. Column shapes:
//   Location: Role, Job Count, Location (City, State), Population
//   State:    Role, Job Count, State, City Count
//   Cluster:  Role, Job Count, Location + 50 Miles, Population

use crate::aggregate::{Aggregates, ClusterGroup, LocationGroup, StateGroup};
use crate::config::consts::CLUSTER_RADIUS_MILES;
use crate::config::options::ViewKind;
use crate::store::DataSet;

pub const LOCATION_HEADERS: [&str; 4] = ["Role", "Job Count", "Location (City, State)", "Population"];
pub const STATE_HEADERS: [&str; 4] = ["Role", "Job Count", "State", "City Count"];

pub fn cluster_headers() -> Vec<String> {
    row!["Role", "Job Count", format!("Location + {} Miles", CLUSTER_RADIUS_MILES), "Population"]
}

fn headers(h: &[&str]) -> Option<Vec<String>> {
    Some(h.iter().map(|s| s!(*s)).collect())
}

pub fn location_table(groups: &[LocationGroup]) -> DataSet {
    let rows = groups
        .iter()
        .map(|g| row![g.role, g.job_count, format!("{}, {}", g.city, g.state), g.population])
        .collect();
    DataSet { headers: headers(&LOCATION_HEADERS), rows }
}

pub fn state_table(groups: &[StateGroup]) -> DataSet {
    let rows = groups
        .iter()
        .map(|g| row![g.role, g.job_count, g.state, g.city_count()])
        .collect();
    DataSet { headers: headers(&STATE_HEADERS), rows }
}

pub fn cluster_table(groups: &[ClusterGroup]) -> DataSet {
    let rows = groups
        .iter()
        .map(|g| row![g.role, g.job_count, join!(&g.city, "_", &g.state), g.population])
        .collect();
    DataSet { headers: Some(cluster_headers()), rows }
}

/// Drop one column by position. Out-of-range leaves the table as is.
pub fn remove_column(table: &DataSet, index: usize) -> DataSet {
    let without = |r: &Vec<String>| -> Vec<String> {
        r.iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c.clone())
            .collect()
    };
    DataSet {
        headers: table.headers.as_ref().map(without),
        rows: table.rows.iter().map(without).collect(),
    }
}

/// One finished table per view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reports {
    pub location: DataSet,
    pub state: DataSet,
    pub cluster: DataSet,
}

impl Reports {
    pub fn build(agg: &Aggregates) -> Self {
        Self {
            location: location_table(&agg.location),
            state: state_table(&agg.state),
            cluster: cluster_table(&agg.cluster),
        }
    }

    pub fn get(&self, view: ViewKind) -> &DataSet {
        match view {
            ViewKind::Location => &self.location,
            ViewKind::State    => &self.state,
            ViewKind::Cluster  => &self.cluster,
        }
    }
}
