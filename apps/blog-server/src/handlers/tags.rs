//! Tag catalog and tag-filtered listing handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::visibility;
use quill_shared::ApiResponse;
use quill_shared::dto::TagResponse;

use crate::handlers::posts::render_posts;
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/tags
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags: Vec<TagResponse> = state
        .tags
        .list_all()
        .await?
        .into_iter()
        .map(|tag| TagResponse {
            id: tag.id,
            name: tag.name,
            color: tag.color,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(tags)))
}

/// GET /api/tags/{name} - posts carrying the named tag.
///
/// An unknown tag name produces an empty listing rather than a 404, matching
/// the original blog's behavior.
pub async fn posts_by_tag(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    let viewer = state.viewer(identity.user_id());

    let posts = match state.tags.find_by_name(&name).await? {
        Some(tag) => {
            let posts = state.posts.list_all().await?;
            visibility::filter_by_tag(posts, tag.id, &viewer)
        }
        None => Vec::new(),
    };

    let responses = render_posts(&state, posts).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}
