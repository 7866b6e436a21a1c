use serde::{Deserialize, Serialize};

/// Nearby point of interest with its annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}
