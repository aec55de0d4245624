// src/cluster/geo.rs
//
// Optional table enrichment. Given coordinates for a city the distance table
// does not know, attach it to the first representative within the radius and
// record the new pair. Coordinates come from a `Geocoder`; the crate only
// ships an in-memory one, there is no network lookup.

use std::collections::HashMap;

use crate::config::consts::EARTH_RADIUS_MILES;
use crate::store::DataSet;
use super::table::{ClusterPair, DistanceTable};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self { Self { lat, lon } }
}

/// Great-circle distance in miles.
pub fn haversine_miles(a: Coord, b: Coord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

pub trait Geocoder {
    fn locate(&self, city: &str, state: &str) -> Option<Coord>;
}

/// Fixed coordinate lookup keyed by (city, state code).
#[derive(Clone, Debug, Default)]
pub struct CoordTable {
    coords: HashMap<(String, String), Coord>,
}

impl CoordTable {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, city: &str, state: &str, coord: Coord) {
        self.coords.insert((s!(city), s!(state)), coord);
    }

    /// `city, state, lat, lon` table; rows with unparseable numbers are skipped.
    pub fn from_dataset(ds: &DataSet) -> Self {
        let mut t = Self::new();
        let (Some(c), Some(s), Some(la), Some(lo)) =
            (ds.column("city"), ds.column("state"), ds.column("lat"), ds.column("lon"))
        else {
            loge!("Coords: expected city,state,lat,lon columns");
            return t;
        };
        for r in &ds.rows {
            let parsed = (|| {
                let lat: f64 = r.get(la)?.trim().parse().ok()?;
                let lon: f64 = r.get(lo)?.trim().parse().ok()?;
                Some((r.get(c)?.trim(), r.get(s)?.trim(), Coord::new(lat, lon)))
            })();
            if let Some((city, state, coord)) = parsed {
                t.insert(city, state, coord);
            }
        }
        t
    }
}

impl Geocoder for CoordTable {
    fn locate(&self, city: &str, state: &str) -> Option<Coord> {
        self.coords.get(&(s!(city), s!(state))).copied()
    }
}

/// Attach `city` to the first representative (table order) within
/// `radius_miles`, append the pair to `table` and return it. `None` when
/// the city or every representative is unlocatable, or nothing is in range.
pub fn extend_cluster(
    table: &mut DistanceTable,
    city: &str,
    geocoder: &dyn Geocoder,
    radius_miles: f64,
) -> Option<ClusterPair> {
    let state = s!(table.state());
    let origin = geocoder.locate(city, &state)?;

    let found = table
        .representatives()
        .into_iter()
        .filter_map(|rep| geocoder.locate(rep, &state).map(|c| (rep, haversine_miles(origin, c))))
        .find(|(_, d)| *d <= radius_miles)
        .map(|(rep, d)| ClusterPair { representative: s!(rep), satellite: s!(city), distance: Some(d) });

    match &found {
        Some(pair) => {
            logf!("Cities: {} joins {} ({:.1} mi) in {}", city, pair.representative, pair.distance.unwrap_or(0.0), state);
            table.push(pair.clone());
        }
        None => logd!("Cities: no representative within {} mi of {}, {}", radius_miles, city, state),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{ClusterResolver, ClusterTables};
    use crate::config::consts::CLUSTER_RADIUS_MILES;

    const AUSTIN: Coord = Coord { lat: 30.2672, lon: -97.7431 };
    const SAN_MARCOS: Coord = Coord { lat: 29.8833, lon: -97.9414 };
    const HOUSTON: Coord = Coord { lat: 29.7604, lon: -95.3698 };

    fn geocoder() -> CoordTable {
        let mut g = CoordTable::new();
        g.insert("Austin", "TX", AUSTIN);
        g.insert("San Marcos", "TX", SAN_MARCOS);
        g.insert("Houston", "TX", HOUSTON);
        g
    }

    fn austin_table() -> DistanceTable {
        DistanceTable::from_pairs("TX", vec![ClusterPair {
            representative: s!("Austin"), satellite: s!("Round Rock"), distance: Some(19.0),
        }])
    }

    #[test]
    fn haversine_known_distances() {
        assert_eq!(haversine_miles(AUSTIN, AUSTIN), 0.0);
        let d = haversine_miles(AUSTIN, HOUSTON);
        assert!((d - 146.0).abs() < 3.0, "Austin to Houston should be ~146 mi, got {d}");
        assert!((haversine_miles(HOUSTON, AUSTIN) - d).abs() < 1e-9);
    }

    #[test]
    fn nearby_city_joins_representative() {
        let mut table = austin_table();
        let pair = extend_cluster(&mut table, "San Marcos", &geocoder(), CLUSTER_RADIUS_MILES).unwrap();
        assert_eq!(pair.representative, "Austin");
        assert!(pair.distance.unwrap() < 35.0);
        assert_eq!(table.representative_of("San Marcos"), Some("Austin"));

        let mut tables = ClusterTables::new();
        tables.insert(table);
        assert_eq!(ClusterResolver::new(tables).resolve("San Marcos", "Texas"), Some("Austin"));
    }

    #[test]
    fn distant_or_unknown_city_is_left_alone() {
        let mut table = austin_table();
        assert!(extend_cluster(&mut table, "Houston", &geocoder(), CLUSTER_RADIUS_MILES).is_none());
        assert!(extend_cluster(&mut table, "Marfa", &geocoder(), CLUSTER_RADIUS_MILES).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn coords_from_table() {
        let ds = DataSet::from_text("city,state,lat,lon\nAustin,TX,30.2672,-97.7431\nNowhere,TX,x,y\n");
        let g = CoordTable::from_dataset(&ds);
        assert_eq!(g.locate("Austin", "TX"), Some(AUSTIN));
        assert_eq!(g.locate("Nowhere", "TX"), None);
    }
}
