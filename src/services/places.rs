use crate::connectors::{Coordinates, ImageConnector, MappingConnector, NearbyQuery, ProviderPlace};
use crate::errors::ApiError;
use crate::views::places::{Location, Place};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const SEARCH_RADIUS_M: u32 = 2000;
pub const MAX_PLACES: usize = 8;
pub const CATEGORY_CODES: [&str; 4] = [
    "catering.restaurant",
    "tourism.attraction",
    "tourism.sights",
    "leisure.park",
];

const FALLBACK_CATEGORY: &str = "place";
const UNNAMED_PLACE: &str = "Unnamed place";

/// Great-circle distance in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let (lat1, lat2) = (from.latitude.to_radians(), to.latitude.to_radians());
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance rounded to two decimals.
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    (haversine_km(from, to) * 100.0).round() / 100.0
}

/// Map provider categories onto the small label vocabulary shown to users.
///
/// Unrecognised categories pass through as the first one the provider sent;
/// "place" is only used when there are none at all.
pub fn normalize_category<S: AsRef<str>>(categories: &[S]) -> String {
    let Some(first) = categories.first() else {
        return FALLBACK_CATEGORY.to_string();
    };

    let joined = categories
        .iter()
        .map(|c| c.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(",");

    let label = if joined.contains("restaurant") {
        "restaurant"
    } else if joined.contains("amusement") {
        "amusement park"
    } else if joined.contains("park") {
        "park"
    } else if joined.contains("attraction") || joined.contains("sights") {
        "tourist attraction"
    } else {
        return first.as_ref().to_string();
    };
    label.to_string()
}

#[tracing::instrument(name = "Geocode place", skip(mapping))]
pub async fn geocode(mapping: &dyn MappingConnector, query: &str) -> Result<Location, ApiError> {
    mapping
        .geocode(query)
        .await?
        .map(|c| Location {
            latitude: c.latitude,
            longitude: c.longitude,
        })
        .ok_or_else(|| ApiError::NotFound("Location not found".to_string()))
}

#[tracing::instrument(name = "Find nearby places", skip(mapping, images))]
pub async fn nearby(
    mapping: &dyn MappingConnector,
    images: &dyn ImageConnector,
    origin: Coordinates,
) -> Result<Vec<Place>, ApiError> {
    let query = NearbyQuery {
        origin,
        radius_m: SEARCH_RADIUS_M,
        categories: &CATEGORY_CODES,
        limit: MAX_PLACES,
    };
    let found = mapping.nearby(&query).await?;
    tracing::info!("Provider returned {} places", found.len());

    let mut places = Vec::with_capacity(MAX_PLACES);
    for raw in found.into_iter().take(MAX_PLACES) {
        places.push(annotate(images, origin, raw).await);
    }
    Ok(places)
}

async fn annotate(images: &dyn ImageConnector, origin: Coordinates, raw: ProviderPlace) -> Place {
    let category = normalize_category(&raw.categories);
    let location = Coordinates {
        latitude: raw.latitude,
        longitude: raw.longitude,
    };
    let name = raw
        .name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| raw.address_line.filter(|a| !a.trim().is_empty()))
        .unwrap_or_else(|| UNNAMED_PLACE.to_string());
    let image = resolve_image(images, &name, &category).await;

    Place {
        distance_km: distance_km(origin, location),
        latitude: raw.latitude,
        longitude: raw.longitude,
        name,
        category,
        image,
    }
}

/// Encyclopedia thumbnail by name, else a stock photo for the category.
/// Lookup failures only cost the image, never the request.
pub async fn resolve_image(images: &dyn ImageConnector, name: &str, category: &str) -> Option<String> {
    match images.encyclopedia_thumbnail(name).await {
        Ok(Some(url)) => return Some(url),
        Ok(None) => {}
        Err(err) => tracing::warn!("Thumbnail lookup for {:?} failed: {}", name, err),
    }

    match images.stock_photo(category).await {
        Ok(url) => url,
        Err(err) => {
            tracing::warn!("Stock photo lookup for {:?} failed: {}", category, err);
            None
        }
    }
}
