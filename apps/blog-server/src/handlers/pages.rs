//! Static page handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Document, validate, visibility};
use quill_shared::ApiResponse;
use quill_shared::dto::{AuthorResponse, PageResponse, UpdatePageRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/pages/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let page = state
        .pages
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page {slug} not found")))?;

    let author = match state.users.find_by_id(page.user_id).await? {
        Some(user) => AuthorResponse {
            id: user.id,
            name: user.name,
            profile_url: user.profile_url,
        },
        None => AuthorResponse {
            id: page.user_id,
            name: String::new(),
            profile_url: None,
        },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PageResponse {
        id: page.id,
        title: page.title,
        slug: page.slug,
        body: page.body,
        author,
        created_at: page.created_at.to_rfc3339(),
        updated_at: page.updated_at.to_rfc3339(),
    })))
}

/// PUT /api/pages/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i32>,
    body: web::Json<UpdatePageRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    validate::validate_title(&req.title)?;
    validate::validate_slug(&req.slug)?;
    Document::from_value(&req.body)?;

    let mut page = state
        .pages
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page {id} not found")))?;

    if !visibility::can_modify(page.user_id, identity.user_id) {
        return Err(AppError::Forbidden);
    }

    page.title = req.title;
    page.slug = req.slug;
    page.body = req.body;
    page.updated_at = chrono::Utc::now();

    let saved = state.pages.save(page).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "id": saved.id, "slug": saved.slug })))
}
