//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! `append_comment` and `toggle_like` must be atomic with respect to the
//! store: two concurrent appends to the same post both land, in some
//! order, with neither overwriting the other. The postgres
//! implementation satisfies this with single-statement updates.

use crate::domain::entities::{Comment, Post};
use crate::error::FeedResult;
use kernel::id::{PostId, UserId};

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Store a new post
    async fn insert(&self, post: &Post) -> FeedResult<()>;

    /// Find a post by id
    async fn find_by_id(&self, post_id: &PostId) -> FeedResult<Option<Post>>;

    /// All posts present at call time, newest first
    async fn find_all(&self) -> FeedResult<Vec<Post>>;

    /// Atomically append a comment; `None` when the post does not exist
    async fn append_comment(
        &self,
        post_id: &PostId,
        comment: &Comment,
    ) -> FeedResult<Option<Post>>;

    /// Atomically toggle a user's like marker; `None` when the post does
    /// not exist
    async fn toggle_like(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> FeedResult<Option<Post>>;
}
