//! Post listing, detail, and authoring handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::reading_time::reading_time;
use quill_core::domain::{
    Document, Post, PostStatus, Tag, TagRef, resolve_tags, validate, visibility,
};
use quill_shared::ApiResponse;
use quill_shared::dto::{
    AuthorResponse, CreatePostRequest, PostCreatedResponse, PostResponse, TagResponse,
    UpdatePostRequest,
};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Listing size for the front page, matching the original blog.
const RECENT_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// GET /api/posts[?search=...]
pub async fn list(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let viewer = state.viewer(identity.user_id());

    let posts = state.posts.list_all().await?;
    let mut posts = match &params.search {
        // Search ignores the viewer: drafts never match.
        Some(query) => visibility::search_published(posts, query),
        None => visibility::filter_visible(posts, &viewer),
    };
    posts.truncate(RECENT_LIMIT);

    let responses = render_posts(&state, posts).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(responses)))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let viewer = state.viewer(identity.user_id());

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .filter(|p| visibility::can_view(p, &viewer))
        .ok_or_else(|| AppError::NotFound(format!("Post {slug} not found")))?;

    let mut responses = render_posts(&state, vec![post]).await?;
    let response = responses.pop().ok_or_else(|| {
        AppError::Internal("post rendering produced no output".to_string())
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let (document, tags, published) = validate_post_fields(&req)?;

    let post = Post::new(
        identity.user_id,
        req.title,
        req.slug,
        req.description,
        req.body,
        tags,
        reading_time(&document),
        published,
    );

    let saved = state.posts.save(post).await.map_err(duplicate_slug)?;

    tracing::info!(post_id = saved.id, slug = %saved.slug, "Post created");

    Ok(HttpResponse::Created().json(PostCreatedResponse {
        id: saved.id,
        slug: saved.slug,
    }))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let (document, tags, published) = validate_post_fields(&req)?;

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    if !visibility::can_modify(post.user_id, identity.user_id) {
        return Err(AppError::Forbidden);
    }

    post.title = req.title;
    post.slug = req.slug;
    post.description = req.description;
    post.body = req.body;
    post.tags = tags;
    post.published = published;
    post.reading_time = reading_time(&document);
    post.updated_at = chrono::Utc::now();

    let saved = state.posts.save(post).await.map_err(duplicate_slug)?;

    Ok(HttpResponse::Ok().json(PostCreatedResponse {
        id: saved.id,
        slug: saved.slug,
    }))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    if !visibility::can_modify(post.user_id, identity.user_id) {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(id).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// Shared validation for the post write paths. Returns the parsed document
/// (for the reading-time estimate), the tag refs, and the status.
fn validate_post_fields(
    req: &CreatePostRequest,
) -> Result<(Document, Vec<TagRef>, PostStatus), AppError> {
    validate::validate_title(&req.title)?;
    validate::validate_slug(&req.slug)?;

    let document = Document::from_value(&req.body)?;

    let tags: Vec<TagRef> = if req.tags.is_null() {
        Vec::new()
    } else {
        serde_json::from_value(req.tags.clone())
            .map_err(|_| AppError::Validation(vec!["Tags must be an array of ids".to_string()]))?
    };

    let published = PostStatus::parse(&req.published).ok_or_else(|| {
        AppError::Validation(vec!["Published must be DRAFT or PUBLISHED".to_string()])
    })?;

    Ok((document, tags, published))
}

fn duplicate_slug(err: quill_core::error::RepoError) -> AppError {
    match err {
        quill_core::error::RepoError::Constraint(_) => {
            AppError::Conflict("A post with this slug already exists".to_string())
        }
        other => other.into(),
    }
}

/// Assemble `PostResponse`s: resolve tags against the catalog and attach the
/// author block, memoizing author lookups across the listing.
pub(crate) async fn render_posts(
    state: &web::Data<AppState>,
    posts: Vec<Post>,
) -> Result<Vec<PostResponse>, AppError> {
    let catalog: Vec<Tag> = state.tags.list_all().await?;

    let mut authors: HashMap<i32, AuthorResponse> = HashMap::new();
    let mut responses = Vec::with_capacity(posts.len());

    for post in posts {
        if !authors.contains_key(&post.user_id) {
            let author = match state.users.find_by_id(post.user_id).await? {
                Some(user) => AuthorResponse {
                    id: user.id,
                    name: user.name,
                    profile_url: user.profile_url,
                },
                None => AuthorResponse {
                    id: post.user_id,
                    name: String::new(),
                    profile_url: None,
                },
            };
            authors.insert(post.user_id, author);
        }
        let author = authors[&post.user_id].clone();

        let tags = resolve_tags(&post.tags, &catalog)
            .into_iter()
            .map(|resolved| {
                resolved.map(|tag| TagResponse {
                    id: tag.id,
                    name: tag.name.clone(),
                    color: tag.color.clone(),
                })
            })
            .collect();

        responses.push(PostResponse {
            id: post.id,
            title: post.title,
            slug: post.slug,
            description: post.description,
            body: post.body,
            tags,
            reading_time: post.reading_time,
            published: post.published.as_str().to_string(),
            author,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        });
    }

    Ok(responses)
}
