// src/config/consts.rs

// Inputs
pub const DEFAULT_DATASET: &str = "jobs.csv";
pub const DEFAULT_RULES_FILE: &str = "role_normalisations.csv";
pub const DEFAULT_CITIES_DIR: &str = "cities";
pub const DISTANCES_SUFFIX: &str = "_distances.csv";
pub const DEFAULT_ADVERTISER: &str = "default_advertiser";

// Clustering
pub const CLUSTER_RADIUS_MILES: f64 = 50.0;
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const LOCATION_FILE: &str = "by_location";
pub const STATE_FILE: &str = "by_state";
pub const CLUSTER_FILE: &str = "by_cluster";
