//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::FeedResult;

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every post present at call time
    pub async fn execute(&self) -> FeedResult<Vec<Post>> {
        self.repo.find_all().await
    }
}
