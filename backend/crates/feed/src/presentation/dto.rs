//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Comment, Post};

/// Comment as rendered inside a post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub message: String,
    pub author: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            message: comment.message,
            author: comment.author.map(|id| id.into_uuid()),
            created_at: comment.created_at,
        }
    }
}

/// Post as rendered in feed responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: Uuid,
    pub message: String,
    pub author: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentDto>,
    pub likes: Vec<Uuid>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id.into_uuid(),
            message: post.message,
            author: post.author.map(|id| id.into_uuid()),
            created_at: post.created_at,
            comments: post.comments.into_iter().map(CommentDto::from).collect(),
            likes: post.likes.into_iter().map(|id| id.into_uuid()).collect(),
        }
    }
}

/// Envelope of every successful protected response: the posts plus the
/// rotated token the client must store for its next request
#[derive(Debug, Clone, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<PostDto>,
    pub token: String,
}

/// Request for POST /posts
///
/// `message` is optional so its absence surfaces as a validation error
/// rather than a deserialization rejection. The `token` body field, when
/// present, is consumed by the auth gate and ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Request for POST /posts/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub message: Option<String>,
}
