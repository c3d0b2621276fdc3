//! Feed Router
//!
//! The auth gate is layered here, inside the router constructor, so no
//! composition of these routes can accidentally skip token verification
//! and rotation.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::domain::token::TokenService;
use auth::presentation::middleware::require_bearer;

use crate::application::config::FeedConfig;
use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgFeedRepository;
use crate::presentation::handlers::{self, FeedAppState};

/// Create the Feed router with PostgreSQL repository
pub fn feed_router(repo: PgFeedRepository, config: FeedConfig, tokens: TokenService) -> Router {
    feed_router_generic(repo, config, tokens)
}

/// Create a generic Feed router for any repository implementation
pub fn feed_router_generic<R>(repo: R, config: FeedConfig, tokens: TokenService) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let state = FeedAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/posts",
            get(handlers::list_posts::<R>).post(handlers::create_post::<R>),
        )
        .route("/posts/{id}", post(handlers::add_comment::<R>))
        .route("/posts/{id}/likes", put(handlers::toggle_like::<R>))
        .layer(middleware::from_fn_with_state(tokens, require_bearer))
        .with_state(state)
}
