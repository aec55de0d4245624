// src/cluster/resolve.rs
use crate::normalize::normalize_state;
use super::table::ClusterTables;

/// Maps a city to its cluster representative by table lookup.
#[derive(Clone, Debug, Default)]
pub struct ClusterResolver {
    tables: ClusterTables,
}

impl ClusterResolver {
    pub fn new(tables: ClusterTables) -> Self { Self { tables } }

    pub fn tables(&self) -> &ClusterTables { &self.tables }

    /// `None` means unresolved: no table for the state, or the city is in
    /// neither column. Satellites resolve to their representative;
    /// representatives resolve to themselves.
    pub fn resolve(&self, city: &str, state: &str) -> Option<&str> {
        let table = self.tables.get(&normalize_state(state))?;
        if let Some(rep) = table.representative_of(city) {
            return Some(rep);
        }
        table.representative(city)
    }
}
