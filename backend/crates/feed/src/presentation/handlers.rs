//! HTTP Handlers
//!
//! All handlers run behind the auth gate: `AuthContext` in the request
//! extensions carries the verified identity and the rotated token, and
//! every success response echoes that token back in the envelope.
//! Business-logic failures (404, 400) return no token; the client keeps
//! using the one it already holds.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

use auth::presentation::middleware::AuthContext;

use crate::application::config::FeedConfig;
use crate::application::{
    AppendCommentUseCase, CreatePostUseCase, ListPostsUseCase, ToggleLikeUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::FeedResult;
use crate::presentation::dto::{AddCommentRequest, CreatePostRequest, PostDto, PostsResponse};
use kernel::id::PostId;

/// Shared state for feed handlers
#[derive(Clone)]
pub struct FeedAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<FeedConfig>,
}

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<FeedAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
) -> FeedResult<Json<PostsResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(envelope(posts, ctx)))
}

/// POST /posts
///
/// Responds with the updated feed, not just the new post, so clients
/// refresh in one round trip.
pub async fn create_post<R>(
    State(state): State<FeedAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<CreatePostRequest>,
) -> FeedResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(ctx.user_id, req.message).await?;

    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok((StatusCode::CREATED, Json(envelope(posts, ctx))))
}

/// POST /posts/{id}
pub async fn add_comment<R>(
    State(state): State<FeedAppState<R>>,
    Path(post_id): Path<Uuid>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<AddCommentRequest>,
) -> FeedResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = AppendCommentUseCase::new(state.repo.clone(), state.config.clone());
    use_case
        .execute(PostId::from_uuid(post_id), ctx.user_id, req.message)
        .await?;

    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok((StatusCode::CREATED, Json(envelope(posts, ctx))))
}

/// PUT /posts/{id}/likes
pub async fn toggle_like<R>(
    State(state): State<FeedAppState<R>>,
    Path(post_id): Path<Uuid>,
    Extension(ctx): Extension<AuthContext>,
) -> FeedResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ToggleLikeUseCase::new(state.repo.clone());
    use_case
        .execute(PostId::from_uuid(post_id), ctx.user_id)
        .await?;

    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;

    Ok((StatusCode::CREATED, Json(envelope(posts, ctx))))
}

/// Build the `{posts, token}` success envelope
fn envelope(posts: Vec<crate::domain::entities::Post>, ctx: AuthContext) -> PostsResponse {
    PostsResponse {
        posts: posts.into_iter().map(PostDto::from).collect(),
        token: ctx.token,
    }
}
