use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Point of interest exactly as the provider reported it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderPlace {
    pub name: Option<String>,
    pub address_line: Option<String>,
    pub categories: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct NearbyQuery<'a> {
    pub origin: Coordinates,
    pub radius_m: u32,
    pub categories: &'a [&'a str],
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlacesResponse {
    #[serde(default)]
    pub features: Vec<PlaceFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceFeature {
    pub properties: PlaceProperties,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceProperties {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl PlaceProperties {
    pub(crate) fn into_place(self) -> Option<ProviderPlace> {
        Some(ProviderPlace {
            latitude: self.lat?,
            longitude: self.lon?,
            name: self.name,
            address_line: self.address_line1,
            categories: self.categories,
        })
    }
}
