//! Contact form and mailing-list handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Message, validate};
use quill_core::ports::OutboundEmail;
use quill_shared::ApiResponse;
use quill_shared::dto::{ContactRequest, SubscribeRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/contact
///
/// Persists the enquiry, then notifies the blog owner by email. Delivery is
/// best effort: a transport failure is logged but does not fail the request.
pub async fn submit_enquiry(
    state: web::Data<AppState>,
    body: web::Json<ContactRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validate::validate_enquiry(&req.name, &req.email, &req.message)?;

    let message = Message::new(req.name, req.email.clone(), req.message.clone());
    let saved = state.messages.save(message).await?;

    let email = OutboundEmail {
        to: state.contact_recipient.clone(),
        from: state.contact_recipient.clone(),
        subject: format!("Blog enquiry from {}", req.email),
        text: req.message,
        html: None,
    };
    if let Err(e) = state.mailer.send(email).await {
        tracing::warn!(message_id = saved.id, "Enquiry notification failed: {e}");
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        saved.id,
        "Thanks for your message",
    )))
}

/// POST /api/subscribe
pub async fn subscribe(
    state: web::Data<AppState>,
    body: web::Json<SubscribeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validate::validate_email(&req.email)?;

    state
        .mailer
        .subscribe(&req.email)
        .await
        .map_err(|e| AppError::Internal(format!("mailing-list signup failed: {e}")))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        req.email,
        "You're on the list",
    )))
}
