use axum::Json;
use axum::extract::{Path, Query, State};
use content::Resolution;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::blog::*;
use crate::models::shared::{matches_category, matches_tag};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/blog",
    tag = "Blog",
    operation_id = "listBlogPosts",
    summary = "List published blog posts",
    description = "Returns published posts in their declared order, optionally filtered by featured flag, tag and category. Missing excerpts and reading times are derived from the detail content.",
    params(BlogListQuery),
    responses(
        (status = 200, description = "List of published posts", body = Vec<BlogPostResponse>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<Vec<BlogPostResponse>>, AppError> {
    let site = &state.site;
    let data: Vec<BlogPostResponse> = site
        .published_posts()
        .filter(|p| query.featured.is_none_or(|f| p.featured == f))
        .filter(|p| matches_tag(&p.tags, query.tag.as_deref()))
        .filter(|p| matches_category(&p.category, query.category.as_deref()))
        .map(|p| {
            let detail = p
                .details_file
                .as_deref()
                .and_then(|key| site.blog_details.resolve(key));
            BlogPostResponse::from_parts(p, detail)
        })
        .collect();

    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog/{slug}",
    tag = "Blog",
    operation_id = "getBlogPost",
    summary = "Resolve a blog page by slug",
    description = "Returns the post summary plus its extended detail record when one exists; `detail: null` otherwise. Unknown and unpublished slugs are both 404.",
    params(("slug" = String, Path, description = "Blog post slug")),
    responses(
        (status = 200, description = "Resolved blog page", body = BlogPageResponse),
        (status = 404, description = "Unknown or unpublished slug (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPageResponse>, AppError> {
    match state.site.resolve_blog(&slug) {
        Resolution::NotFound => Err(AppError::NotFound(format!("Blog post '{slug}' not found"))),
        Resolution::Fallback(post) => Ok(Json(BlogPageResponse {
            post: BlogPostResponse::from_parts(post, None),
            detail: None,
        })),
        Resolution::Rich(post, detail) => Ok(Json(BlogPageResponse {
            post: BlogPostResponse::from_parts(post, Some(detail)),
            detail: Some(detail.into()),
        })),
    }
}
