//! Feed Backend Module
//!
//! The post aggregate and its HTTP surface. Clean Architecture structure:
//! - `domain/` - Post/Comment entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Aggregate Model
//! - Comments are value objects embedded in their post: append-only,
//!   insertion-ordered, no identity of their own
//! - Likes are a set of user ids; a user likes a post at most once
//! - Comment append and like toggle are single atomic store operations,
//!   so concurrent mutations cannot lose writes
//!
//! Every route here sits behind the auth gate: the caller presents a
//! token and every success response carries the rotated replacement.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FeedConfig;
pub use error::{FeedError, FeedResult};
pub use infra::postgres::PgFeedRepository;
pub use presentation::router::feed_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgFeedRepository as FeedStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
