//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod append_comment;
pub mod config;
pub mod create_post;
pub mod list_posts;
pub mod toggle_like;

// Re-exports
pub use append_comment::AppendCommentUseCase;
pub use config::FeedConfig;
pub use create_post::CreatePostUseCase;
pub use list_posts::ListPostsUseCase;
pub use toggle_like::ToggleLikeUseCase;

use crate::error::{FeedError, FeedResult};

/// Validate a client-supplied message field
///
/// Missing and whitespace-only messages are the same error; length is
/// counted in Unicode code points. Returns the trimmed text.
pub(crate) fn validated_message(
    message: Option<String>,
    max_chars: usize,
) -> FeedResult<String> {
    let message = message.unwrap_or_default();
    let trimmed = message.trim();

    if trimmed.is_empty() {
        return Err(FeedError::EmptyMessage);
    }

    if trimmed.chars().count() > max_chars {
        return Err(FeedError::MessageTooLong { max: max_chars });
    }

    Ok(trimmed.to_string())
}
