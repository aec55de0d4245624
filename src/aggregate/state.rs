// src/aggregate/state.rs
use std::collections::HashSet;

use crate::jobs::NormalizedRow;
use super::{scan, Accumulator};

/// Jobs for one role across a whole state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateGroup {
    pub state: String,
    pub role: String,
    /// Every row counts, repeated cities included.
    pub job_count: u64,
    cities: Vec<String>, // first-seen order, no repeats
    seen: HashSet<String>,
}

impl StateGroup {
    pub fn city_count(&self) -> usize { self.cities.len() }
    pub fn cities(&self) -> &[String] { &self.cities }
}

impl Accumulator for StateGroup {
    type Key = (String, String);

    fn key(row: &NormalizedRow) -> Self::Key {
        (row.state.clone(), row.role.clone())
    }

    fn start(row: &NormalizedRow) -> Self {
        Self {
            state: row.state.clone(),
            role: row.role.clone(),
            job_count: 1,
            cities: vec![row.city.clone()],
            seen: HashSet::from([row.city.clone()]),
        }
    }

    fn add(&mut self, row: &NormalizedRow) {
        self.job_count += 1;
        if self.seen.insert(row.city.clone()) {
            self.cities.push(row.city.clone());
        }
    }
}

pub fn aggregate(rows: &[NormalizedRow]) -> Vec<StateGroup> {
    scan(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(role: &str, city: &str, state: &str) -> NormalizedRow {
        NormalizedRow::new(role, city, state, 0.0)
    }

    #[test]
    fn repeated_city_counts_jobs_not_cities() {
        let groups = aggregate(&[
            r("Driver", "Austin", "TX"),
            r("Driver", "Austin", "TX"),
            r("Driver", "Dallas", "TX"),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].job_count, 3);
        assert_eq!(groups[0].city_count(), 2);
        assert_eq!(groups[0].cities(), ["Austin", "Dallas"]);
    }

    #[test]
    fn many_cities_keep_first_seen_order() {
        let mut rows: Vec<NormalizedRow> = (0..500).map(|i| r("Driver", &format!("City{i}"), "TX")).collect();
        rows.extend((0..500).rev().map(|i| r("Driver", &format!("City{i}"), "TX")));
        let groups = aggregate(&rows);
        assert_eq!(groups[0].job_count, 1000);
        assert_eq!(groups[0].city_count(), 500);
        assert_eq!(groups[0].cities()[0], "City0");
        assert_eq!(groups[0].cities()[499], "City499");
    }

    #[test]
    fn state_and_role_both_split_groups() {
        let groups = aggregate(&[
            r("Driver", "Austin", "TX"),
            r("Cook", "Austin", "TX"),
            r("Driver", "Tulsa", "OK"),
        ]);
        let keys: Vec<(&str, &str)> = groups.iter().map(|g| (g.state.as_str(), g.role.as_str())).collect();
        assert_eq!(keys, vec![("TX", "Driver"), ("TX", "Cook"), ("OK", "Driver")]);
    }
}
