// src/cluster/mod.rs
//! # City clustering
//!
//! Cities within the clustering radius of each other share one bucket in the
//! cluster view. Membership comes from precomputed per-state distance tables
//! (`cities/<ST>_distances.csv`), never from live geocoding:
//!
//! - `table`   – `DistanceTable` / `ClusterTables`: load, lookup, persist.
//! - `resolve` – `ClusterResolver`: city + state → representative or unresolved.
//! - `geo`     – optional enrichment: haversine distance and a `Geocoder` seam
//!               for growing a table with cities it does not know yet. Not used
//!               by the aggregators.
pub mod geo;
pub mod resolve;
pub mod table;

pub use resolve::ClusterResolver;
pub use table::{ClusterPair, ClusterTables, DistanceTable};
