//! HTTP routes of the directory API.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};

use crate::dto::api::ApiError;
use crate::services::ServiceError;

pub mod api;

/// Registers every route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::health)
        .service(api::list_users)
        .service(api::list_skills)
        .service(api::show_user);
}

/// Maps a service error to its HTTP status.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidId(_) | ServiceError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders the JSON error envelope for `err`.
///
/// Internal faults are reported with `fallback_message`. Their detail is
/// logged where they arise and never reaches the client.
pub fn error_response(err: &ServiceError, fallback_message: &str) -> HttpResponse {
    let message = if err.is_internal() {
        fallback_message.to_string()
    } else {
        err.to_string()
    };
    HttpResponse::build(status_for(err)).json(ApiError::new(err.code(), message))
}
