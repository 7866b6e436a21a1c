use crate::connectors::MappingConnector;
use crate::errors::ApiError;
use crate::forms;
use crate::services;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

/// POST /api/places/geocode
#[tracing::instrument(name = "Geocode.", skip_all)]
#[post("/geocode")]
pub async fn geocode_handler(
    form: web::Json<forms::GeocodeForm>,
    mapping: web::Data<Arc<dyn MappingConnector>>,
) -> Result<HttpResponse, ApiError> {
    forms::validate(&*form)?;

    let location = services::places::geocode(mapping.get_ref().as_ref(), &form.query).await?;
    Ok(HttpResponse::Ok().json(location))
}
