// src/aggregate/location.rs
use crate::jobs::NormalizedRow;
use super::{scan, Accumulator};

/// Jobs for one role at one exact city/state.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationGroup {
    pub role: String,
    pub city: String,
    pub state: String,
    pub job_count: u64,
    pub population: f64,
}

impl Accumulator for LocationGroup {
    type Key = (String, String, String);

    fn key(row: &NormalizedRow) -> Self::Key {
        (row.role.clone(), row.city.clone(), row.state.clone())
    }

    fn start(row: &NormalizedRow) -> Self {
        Self {
            role: row.role.clone(),
            city: row.city.clone(),
            state: row.state.clone(),
            job_count: 1,
            population: row.population,
        }
    }

    fn add(&mut self, row: &NormalizedRow) {
        self.job_count += 1;
        self.population += row.population;
    }
}

pub fn aggregate(rows: &[NormalizedRow]) -> Vec<LocationGroup> {
    scan(rows)
}
