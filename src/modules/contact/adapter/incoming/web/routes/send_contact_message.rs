use actix_web::{http::header::ACCEPT_LANGUAGE, post, web, HttpRequest, HttpResponse, Responder};
use portfolio_site::{
    i18n::{Locale, Translations},
    models::ContactForm,
    validation::FieldErrors,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::ports::incoming::use_cases::{
        SendContactMessageCommand, SendContactMessageError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = true)]
    pub delivered: bool,
    #[schema(example = "Message sent successfully! I'll get back to you soon.")]
    pub message: String,
}

/// Falls back to pt-BR when the header is missing or names no supported locale.
fn request_locale(req: &HttpRequest) -> Locale {
    req.headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or_default()
}

fn field_errors_json(errors: &FieldErrors) -> Value {
    let details: Map<String, Value> = errors
        .iter()
        .map(|(field, message)| (field.as_str().to_string(), Value::from(*message)))
        .collect();
    Value::Object(details)
}

/// Send contact message
///
/// Validates the form and relays it to the configured form service.
/// Messages are localized from `Accept-Language`.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    params(
        ("Accept-Language" = Option<String>, Header, description = "pt-BR (default), es or en")
    ),
    responses(
        (status = 200, description = "Message delivered", body = inline(SuccessResponse<ContactResponse>)),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (
            status = 422,
            description = "One or more fields are invalid",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid contact form",
                    "details": { "email": "Please enter a valid email" }
                }
            })
        ),
        (status = 502, description = "Form service rejected or could not be reached", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn send_contact_message_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<ContactForm>,
) -> impl Responder {
    let translations = request_locale(&req).translations();

    let command = match SendContactMessageCommand::new(body.into_inner(), translations) {
        Ok(command) => command,
        Err(err) => return map_send_contact_message_error(err, translations),
    };

    match data.send_contact_message_use_case.execute(command).await {
        Ok(()) => ApiResponse::success(ContactResponse {
            delivered: true,
            message: translations.contact.success.to_string(),
        }),
        Err(err) => map_send_contact_message_error(err, translations),
    }
}

fn map_send_contact_message_error(
    err: SendContactMessageError,
    translations: &Translations,
) -> HttpResponse {
    match err {
        SendContactMessageError::InvalidFields(errors) => ApiResponse::unprocessable(
            "VALIDATION_ERROR",
            "Invalid contact form",
            field_errors_json(&errors),
        ),
        SendContactMessageError::DeliveryFailed => {
            ApiResponse::bad_gateway("CONTACT_DELIVERY_FAILED", translations.contact.error)
        }
    }
}
