// src/aggregate/cluster.rs
use crate::cluster::ClusterResolver;
use crate::jobs::NormalizedRow;
use super::{scan, Accumulator};

/// Jobs for one role inside one city cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterGroup {
    /// The cluster representative, not necessarily a city any row named.
    pub city: String,
    pub state: String,
    pub role: String,
    pub job_count: u64,
    pub population: f64,
}

impl Accumulator for ClusterGroup {
    type Key = (String, String, String);

    fn key(row: &NormalizedRow) -> Self::Key {
        (row.city.clone(), row.state.clone(), row.role.clone())
    }

    fn start(row: &NormalizedRow) -> Self {
        Self {
            city: row.city.clone(),
            state: row.state.clone(),
            role: row.role.clone(),
            job_count: 1,
            population: row.population,
        }
    }

    fn add(&mut self, row: &NormalizedRow) {
        self.job_count += 1;
        self.population += row.population;
    }
}

/// Rows whose city has no representative are skipped.
pub fn aggregate(rows: &[NormalizedRow], resolver: &ClusterResolver) -> Vec<ClusterGroup> {
    let mut skipped = 0usize;
    let resolved: Vec<NormalizedRow> = rows
        .iter()
        .filter_map(|row| {
            let rep = resolver.resolve(&row.city, &row.state);
            if rep.is_none() { skipped += 1; }
            rep.map(|city| NormalizedRow { city: s!(city), ..row.clone() })
        })
        .collect();

    if skipped > 0 {
        logd!("Cluster: {} of {} row(s) unresolved, left out", skipped, rows.len());
    }
    scan(&resolved)
}
