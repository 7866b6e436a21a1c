use crate::connectors::{Coordinates, ImageConnector, MappingConnector};
use crate::errors::ApiError;
use crate::forms;
use crate::services;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

/// POST /api/places/nearby
/// Up to eight points of interest around the given point, with distance and image.
#[tracing::instrument(name = "Nearby places.", skip_all)]
#[post("/nearby")]
pub async fn nearby_handler(
    form: web::Json<forms::NearbyForm>,
    mapping: web::Data<Arc<dyn MappingConnector>>,
    images: web::Data<Arc<dyn ImageConnector>>,
) -> Result<HttpResponse, ApiError> {
    forms::validate(&*form)?;

    let origin = Coordinates {
        latitude: form.latitude,
        longitude: form.longitude,
    };
    let places =
        services::places::nearby(mapping.get_ref().as_ref(), images.get_ref().as_ref(), origin)
            .await?;

    Ok(HttpResponse::Ok().json(places))
}
