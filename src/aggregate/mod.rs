// src/aggregate/mod.rs
//! # Aggregation engine
//!
//! Three independent views over the same normalized rows:
//!
//! | view       | key                           | accumulates                    |
//! |------------|-------------------------------|--------------------------------|
//! | `location` | role, city, state             | job count, population sum      |
//! | `state`    | state, role                   | job count, distinct cities     |
//! | `cluster`  | representative, state, role   | job count, population sum      |
//!
//! Every view is a single pass through `scan`: build the key, start a group on
//! first sight, fold later rows into it. Groups come back in first-occurrence
//! order of their key. Nothing is shared between views or between runs, so
//! `run_all` can run them side by side.

use std::collections::HashMap;
use std::hash::Hash;
use std::thread;

use crate::cluster::ClusterResolver;
use crate::jobs::NormalizedRow;

pub mod cluster;
pub mod location;
pub mod state;

pub use cluster::ClusterGroup;
pub use location::LocationGroup;
pub use state::StateGroup;

/// A running total for one view.
pub(crate) trait Accumulator: Sized {
    type Key: Hash + Eq;

    fn key(row: &NormalizedRow) -> Self::Key;
    fn start(row: &NormalizedRow) -> Self;
    fn add(&mut self, row: &NormalizedRow);
}

/// One pass; groups in first-occurrence order of their key.
pub(crate) fn scan<'a, A, I>(rows: I) -> Vec<A>
where
    A: Accumulator,
    I: IntoIterator<Item = &'a NormalizedRow>,
{
    let mut index: HashMap<A::Key, usize> = HashMap::new();
    let mut groups: Vec<A> = Vec::new();

    for row in rows {
        let key = A::key(row);
        match index.get(&key) {
            Some(&ix) => groups[ix].add(row),
            None => {
                index.insert(key, groups.len());
                groups.push(A::start(row));
            }
        }
    }
    groups
}

/// Output of one run across all three views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregates {
    pub location: Vec<LocationGroup>,
    pub state: Vec<StateGroup>,
    pub cluster: Vec<ClusterGroup>,
}

/// Run the three views concurrently over the same rows.
pub fn run_all(rows: &[NormalizedRow], resolver: &ClusterResolver) -> Aggregates {
    thread::scope(|s| {
        let loc = s.spawn(|| location::aggregate(rows));
        let st = s.spawn(|| state::aggregate(rows));
        let cl = cluster::aggregate(rows, resolver);

        Aggregates {
            location: join(loc),
            state: join(st),
            cluster: cl,
        }
    })
}

// Worker panics surface on the caller's thread, as if run inline.
fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e))
}
