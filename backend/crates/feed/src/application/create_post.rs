//! Create Post Use Case

use std::sync::Arc;

use crate::application::config::FeedConfig;
use crate::application::validated_message;
use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::FeedResult;
use kernel::id::UserId;

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
    config: Arc<FeedConfig>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<FeedConfig>) -> Self {
        Self { repo, config }
    }

    /// Create a post authored by the authenticated caller
    pub async fn execute(&self, author: UserId, message: Option<String>) -> FeedResult<Post> {
        let message = validated_message(message, self.config.post_max_chars)?;

        let post = Post::new(message, Some(author));
        self.repo.insert(&post).await?;

        tracing::info!(post_id = %post.post_id, author = %author, "Post created");

        Ok(post)
    }
}
