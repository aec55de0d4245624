// src/cluster/table.rs
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use crate::config::consts::DISTANCES_SUFFIX;
use crate::store::{self, DataSet};

const COL_REPRESENTATIVE: &str = "City 1";
const COL_SATELLITE: &str = "City 2";
const COL_DISTANCE: &str = "Distance";

/// One table row: `satellite` lies within the radius of `representative`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterPair {
    pub representative: String,
    pub satellite: String,
    pub distance: Option<f64>,
}

/// Distance table for one state. Lookups are exact, case-sensitive city names.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    state: String,
    pairs: Vec<ClusterPair>,
    by_satellite: HashMap<String, usize>, // first row wins
    representatives: HashSet<String>,
}

impl DistanceTable {
    pub fn new(state: &str) -> Self {
        Self { state: s!(state), ..Self::default() }
    }

    pub fn from_pairs(state: &str, pairs: Vec<ClusterPair>) -> Self {
        let mut t = Self::new(state);
        for p in pairs {
            t.push(p);
        }
        t
    }

    /// Build from a parsed `City 1, City 2, Distance` table. Either city column
    /// may be absent; the table then only answers for the column it has.
    pub fn from_dataset(state: &str, ds: &DataSet) -> Self {
        let rep = ds.column(COL_REPRESENTATIVE);
        let sat = ds.column(COL_SATELLITE);
        let dist = ds.column(COL_DISTANCE);
        if rep.is_none() && sat.is_none() {
            loge!("Cities: {} table has neither '{}' nor '{}'", state, COL_REPRESENTATIVE, COL_SATELLITE);
        }

        let get = |r: &Vec<String>, ix: Option<usize>| {
            ix.and_then(|i| r.get(i)).map(|c| s!(c.trim())).unwrap_or_default()
        };

        let mut t = Self::new(state);
        for r in &ds.rows {
            t.push(ClusterPair {
                representative: get(r, rep),
                satellite: get(r, sat),
                distance: dist.and_then(|i| r.get(i)).and_then(|c| c.trim().parse().ok()),
            });
        }
        t
    }

    pub fn state(&self) -> &str { &self.state }
    pub fn len(&self) -> usize { self.pairs.len() }
    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }
    pub fn pairs(&self) -> &[ClusterPair] { &self.pairs }

    /// Append a row and index it. Empty cells are stored but never match;
    /// a satellite is indexed by its first row that names a representative.
    pub fn push(&mut self, pair: ClusterPair) {
        let ix = self.pairs.len();
        if !pair.representative.is_empty() {
            if !pair.satellite.is_empty() {
                self.by_satellite.entry(pair.satellite.clone()).or_insert(ix);
            }
            self.representatives.insert(pair.representative.clone());
        }
        self.pairs.push(pair);
    }

    /// Representative of `city` when it is listed as a satellite.
    pub fn representative_of(&self, city: &str) -> Option<&str> {
        self.by_satellite
            .get(city)
            .map(|&ix| self.pairs[ix].representative.as_str())
    }

    pub fn is_representative(&self, city: &str) -> bool {
        self.representatives.contains(city)
    }

    /// The table's own copy of `city` when it is listed as a representative.
    pub fn representative(&self, city: &str) -> Option<&str> {
        self.representatives.get(city).map(String::as_str)
    }

    /// Distinct representatives in first-seen order.
    pub fn representatives(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .map(|p| p.representative.as_str())
            .filter(|r| !r.is_empty() && seen.insert(*r))
            .collect()
    }

    pub fn to_dataset(&self) -> DataSet {
        let headers = Some(row![COL_REPRESENTATIVE, COL_SATELLITE, COL_DISTANCE]);
        let rows = self.pairs
            .iter()
            .map(|p| row![
                p.representative,
                p.satellite,
                p.distance.map(|d| d.to_string()).unwrap_or_default(),
            ])
            .collect();
        DataSet { headers, rows }
    }

    /// Persist in the same shape `from_dataset` reads.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        store::save_table(path, &self.to_dataset())
    }
}

/// All per-state tables for one run, keyed by state code.
#[derive(Clone, Debug, Default)]
pub struct ClusterTables {
    by_state: HashMap<String, DistanceTable>,
}

impl ClusterTables {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, table: DistanceTable) {
        self.by_state.insert(s!(table.state()), table);
    }

    pub fn get(&self, state: &str) -> Option<&DistanceTable> {
        self.by_state.get(state)
    }

    pub fn get_mut(&mut self, state: &str) -> Option<&mut DistanceTable> {
        self.by_state.get_mut(state)
    }

    pub fn len(&self) -> usize { self.by_state.len() }
    pub fn is_empty(&self) -> bool { self.by_state.is_empty() }

    /// Read every `<ST>_distances.csv` in `dir`. A missing directory or an
    /// unreadable file just means no clustering data for those states.
    pub fn load_dir(dir: &Path) -> Self {
        let mut tables = Self::new();
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                logd!("Cities: {} unavailable ({}), no clustering data", dir.display(), e);
                return tables;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(state) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(DISTANCES_SUFFIX))
            else { continue };

            match store::load_table(&path) {
                Ok(Some(ds)) => tables.insert(DistanceTable::from_dataset(state, &ds)),
                Ok(None) => {}
                Err(e) => loge!("Cities: error reading {} ({})", path.display(), e),
            }
        }
        logf!("Cities: loaded {} state table(s) from {}", tables.len(), dir.display());
        tables
    }

    /// `<dir>/<ST>_distances.csv`
    pub fn path_for(dir: &Path, state: &str) -> std::path::PathBuf {
        dir.join(join!(state, DISTANCES_SUFFIX))
    }
}
