//! Append Comment Use Case
//!
//! Any authenticated user may comment on any post; there is no ownership
//! check beyond the auth gate having verified the caller.

use std::sync::Arc;

use crate::application::config::FeedConfig;
use crate::application::validated_message;
use crate::domain::entities::{Comment, Post};
use crate::domain::repository::PostRepository;
use crate::error::{FeedError, FeedResult};
use kernel::id::{PostId, UserId};

/// Append comment use case
pub struct AppendCommentUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
    config: Arc<FeedConfig>,
}

impl<R> AppendCommentUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<FeedConfig>) -> Self {
        Self { repo, config }
    }

    /// Append a comment to an existing post, returning the updated post
    pub async fn execute(
        &self,
        post_id: PostId,
        author: UserId,
        message: Option<String>,
    ) -> FeedResult<Post> {
        let message = validated_message(message, self.config.comment_max_chars)?;

        let comment = Comment::new(message, Some(author));

        let post = self
            .repo
            .append_comment(&post_id, &comment)
            .await?
            .ok_or(FeedError::PostNotFound)?;

        tracing::info!(
            post_id = %post_id,
            author = %author,
            comment_count = post.comments.len(),
            "Comment appended"
        );

        Ok(post)
    }
}
