//! Auth Router
//!
//! The login and signup routes are the only unauthenticated surface;
//! neither sits behind the auth gate.

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/tokens", post(handlers::login::<PgAuthRepository>))
        .route("/users", post(handlers::sign_up::<PgAuthRepository>))
        .with_state(state)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/tokens", post(handlers::login::<R>))
        .route("/users", post(handlers::sign_up::<R>))
        .with_state(state)
}
