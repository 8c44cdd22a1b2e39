//! Handler helper functions

use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, LOCATION};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::constants::INVALID_BODY_MESSAGE;
use crate::errors::{Result, ServiceError};

/// Decode a JSON or urlencoded body. An empty body yields `T::default()`.
pub fn parse_form<T>(req: &HttpRequest, body: &web::Bytes) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));

    let parsed = if is_json {
        serde_json::from_slice::<T>(body).map_err(|e| e.to_string())
    } else {
        std::str::from_utf8(body)
            .map_err(|e| e.to_string())
            .and_then(|s| {
                web::Query::<T>::from_query(s)
                    .map(web::Query::into_inner)
                    .map_err(|e| e.to_string())
            })
    };

    parsed.map_err(|e| {
        debug!("Rejected request body: {}", e);
        ServiceError::bad_request(INVALID_BODY_MESSAGE)
    })
}

/// Collect the names of absent or blank fields into a single 400.
pub fn require_fields(fields: &[(&str, Option<&String>)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 201 Created + Location
pub fn created_response<T: Serialize>(location: &str, body: T) -> HttpResponse {
    HttpResponse::Created()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .append_header((LOCATION, location))
        .json(body)
}
