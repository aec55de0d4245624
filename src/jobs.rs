// src/jobs.rs
//
// Typed job rows pulled out of a raw `DataSet`, plus the per-row
// normalization pass (state code + canonical role) every view consumes.

use crate::normalize::{normalize_state, RoleRules};
use crate::store::DataSet;

const COL_CITY: &str = "city";
const COL_STATE: &str = "state";
const COL_TITLE: &str = "title";
const COL_POPULATION: &str = "population";
const COL_ADVERTISER: &str = "advertiser";

/// One listing as it appears in the dataset (cells trimmed).
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub city: String,
    pub state: String,
    pub title: String,
    pub population: f64,
    pub advertiser: String,
}

/// `state` is a 2-letter code where recognised; `role` is the rewritten title.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRow {
    pub city: String,
    pub state: String,
    pub role: String,
    pub population: f64,
}

impl NormalizedRow {
    pub fn new(role: &str, city: &str, state: &str, population: f64) -> Self {
        Self { city: s!(city), state: s!(state), role: s!(role), population }
    }
}

/// Population cell → non-negative number. Garbage, blanks, negatives and
/// non-finite values are 0; decimals are kept; "12,500" reads as 12500.
pub fn parse_population(cell: &str) -> f64 {
    let t = cell.trim().replace(',', "");
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f,
        _ => 0.0,
    }
}

/// Pull typed rows out of a dataset by header name. Missing columns read as
/// empty (population as 0); rows without their own advertiser get
/// `default_advertiser`.
pub fn rows_from_dataset(ds: &DataSet, default_advertiser: &str) -> Vec<Row> {
    let city = ds.column(COL_CITY);
    let state = ds.column(COL_STATE);
    let title = ds.column(COL_TITLE);
    let population = ds.column(COL_POPULATION);
    let advertiser = ds.column(COL_ADVERTISER);

    for (name, ix) in [(COL_CITY, city), (COL_STATE, state), (COL_TITLE, title), (COL_POPULATION, population)] {
        if ix.is_none() {
            loge!("Dataset: no '{}' column, defaulting", name);
        }
    }

    ds.rows
        .iter()
        .map(|r| {
            let own = cell(r, advertiser);
            Row {
                city: cell(r, city),
                state: cell(r, state),
                title: cell(r, title),
                population: parse_population(&cell(r, population)),
                advertiser: if own.is_empty() { s!(default_advertiser) } else { own },
            }
        })
        .collect()
}

fn cell(r: &[String], ix: Option<usize>) -> String {
    ix.and_then(|i| r.get(i)).map(|c| s!(c.trim())).unwrap_or_default()
}

pub fn normalize_row(row: &Row, rules: &RoleRules) -> NormalizedRow {
    NormalizedRow {
        city: row.city.clone(),
        state: normalize_state(&row.state),
        role: rules.resolve(&row.advertiser, &row.title),
        population: row.population,
    }
}

pub fn normalize_rows(rows: &[Row], rules: &RoleRules) -> Vec<NormalizedRow> {
    rows.iter().map(|r| normalize_row(r, rules)).collect()
}
