use crate::errors::ApiError;
use actix_web::{dev::ServiceRequest, http::header::HeaderName};
use std::str::FromStr;

pub fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, ApiError>
where
    T: FromStr,
{
    let Some(header_value) = req.headers().get(HeaderName::from_static(header_name)) else {
        return Ok(None);
    };

    header_value
        .to_str()
        .map_err(|_| ApiError::Unauthorized(format!("header {header_name} can't be converted to string")))?
        .parse::<T>()
        .map_err(|_| ApiError::Unauthorized(format!("header {header_name} has wrong type")))
        .map(Some)
}
