// src/shared/api/cors.rs
use actix_cors::Cors;
use actix_web::http::{header, Method};

const MAX_AGE_SECS: usize = 3600;

/// Browser access for the site's origins. GET for content, POST for the
/// contact form, OPTIONS for preflight.
pub fn cors_for_origins(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::ACCEPT_LANGUAGE])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-response-time"),
        ])
        .max_age(MAX_AGE_SECS)
}
