// src/normalize/role.rs
//
// Advertiser-scoped title rewriting. A rule table is loaded once per run and
// then consulted read-only for every row.

use std::path::Path;

use crate::store::{self, DataSet};

const COL_ADVERTISER: &str = "Advertiser";
const COL_SEARCH_FOR: &str = "Search For";
const COL_IF_IN_TITLE: &str = "If in Title";

/// One row of the rule table, pre-folded for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRule {
    advertiser: String,        // trimmed, lower-cased
    search_terms: Vec<String>, // trimmed, lower-cased, never empty strings
    canonical_role: String,
}

impl RoleRule {
    /// `search_for` is the raw comma-separated term list.
    pub fn new(advertiser: &str, search_for: &str, canonical_role: &str) -> Self {
        let search_terms = search_for
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self {
            advertiser: advertiser.trim().to_lowercase(),
            search_terms,
            canonical_role: s!(canonical_role),
        }
    }

    pub fn canonical_role(&self) -> &str { &self.canonical_role }

    /// `advertiser` and `title` must already be trimmed + lower-cased.
    fn matches(&self, advertiser: &str, title: &str) -> bool {
        self.advertiser == advertiser
            && self.search_terms.iter().any(|term| title.contains(term.as_str()))
    }
}

/// First matching rule wins; no match returns `title` untouched.
pub fn resolve_role(advertiser: &str, title: &str, rules: &[RoleRule]) -> String {
    let adv = advertiser.trim().to_lowercase();
    let folded = title.trim().to_lowercase();
    rules
        .iter()
        .find(|r| r.matches(&adv, &folded))
        .map(|r| s!(r.canonical_role()))
        .unwrap_or_else(|| s!(title))
}

/// Ordered, immutable rule table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleRules {
    rules: Vec<RoleRule>,
}

impl RoleRules {
    pub fn new(rules: Vec<RoleRule>) -> Self { Self { rules } }

    pub fn len(&self) -> usize { self.rules.len() }
    pub fn is_empty(&self) -> bool { self.rules.is_empty() }
    pub fn as_slice(&self) -> &[RoleRule] { &self.rules }

    pub fn resolve(&self, advertiser: &str, title: &str) -> String {
        resolve_role(advertiser, title, &self.rules)
    }

    /// Build from a parsed table with `Advertiser`, `Search For`,
    /// `If in Title` headers. Rows missing a cell are skipped.
    pub fn from_dataset(ds: &DataSet) -> Self {
        let cols = (
            ds.column(COL_ADVERTISER),
            ds.column(COL_SEARCH_FOR),
            ds.column(COL_IF_IN_TITLE),
        );
        let (Some(a), Some(s), Some(t)) = cols else {
            loge!("Rules: expected columns '{}', '{}', '{}'; using none",
                COL_ADVERTISER, COL_SEARCH_FOR, COL_IF_IN_TITLE);
            return Self::default();
        };

        let rules = ds.rows
            .iter()
            .filter_map(|r| Some(RoleRule::new(r.get(a)?, r.get(s)?, r.get(t)?)))
            .collect();
        Self { rules }
    }

    /// Load the rule table. A missing or unreadable file means "no rules":
    /// every title passes through unchanged.
    pub fn load(path: &Path) -> Self {
        match store::load_table(path) {
            Ok(Some(ds)) => {
                let rules = Self::from_dataset(&ds);
                logf!("Rules: loaded {} from {}", rules.len(), path.display());
                rules
            }
            Ok(None) => {
                logd!("Rules: {} not found, titles pass through", path.display());
                Self::default()
            }
            Err(e) => {
                loge!("Rules: could not read {} ({}), titles pass through", path.display(), e);
                Self::default()
            }
        }
    }
}
