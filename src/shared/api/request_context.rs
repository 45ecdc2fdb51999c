// src/shared/api/request_context.rs
use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
    Error,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const RESPONSE_TIME_HEADER: &str = "x-response-time";

/// Tags every request with a UUID, runs the handler inside a span carrying
/// that id, and reports the id and elapsed time back as response headers.
pub async fn request_context(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.path(),
    );

    let started = Instant::now();
    let mut res = next.call(req).instrument(span.clone()).await?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    span.in_scope(|| {
        info!(
            status = res.status().as_u16(),
            elapsed_ms,
            "Request completed"
        )
    });

    let headers = res.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{:.2}ms", elapsed_ms)) {
        headers.insert(HeaderName::from_static(RESPONSE_TIME_HEADER), value);
    }

    Ok(res)
}
