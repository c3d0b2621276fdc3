//! Toggle Like Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{FeedError, FeedResult};
use kernel::id::{PostId, UserId};

/// Toggle like use case
pub struct ToggleLikeUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ToggleLikeUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Add or remove the caller's like marker, returning the updated post
    pub async fn execute(&self, post_id: PostId, user_id: UserId) -> FeedResult<Post> {
        let post = self
            .repo
            .toggle_like(&post_id, &user_id)
            .await?
            .ok_or(FeedError::PostNotFound)?;

        tracing::debug!(
            post_id = %post_id,
            user_id = %user_id,
            liked = post.is_liked_by(&user_id),
            "Like toggled"
        );

        Ok(post)
    }
}
