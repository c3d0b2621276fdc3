//! Domain Entities
//!
//! The Post aggregate. Comments have no life of their own: they exist
//! only inside their parent post, in append order. Likes are a set of
//! user ids with uniqueness enforced by the aggregate.

use chrono::{DateTime, Utc};

use kernel::id::{PostId, UserId};

/// Comment - value object embedded in a Post
///
/// No id: position in the parent's list is the only identity it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub message: String,
    pub author: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(message: String, author: Option<UserId>) -> Self {
        Self {
            message,
            author,
            created_at: Utc::now(),
        }
    }
}

/// Post entity - a single feed entry
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    /// Non-empty text (validated by the application layer)
    pub message: String,
    /// Author reference; never embedded, only the id
    pub author: Option<UserId>,
    pub created_at: DateTime<Utc>,
    /// Append-only, insertion order = display order
    pub comments: Vec<Comment>,
    /// Like markers; one per user at most
    pub likes: Vec<UserId>,
}

impl Post {
    /// Create a new post with no comments and no likes
    pub fn new(message: String, author: Option<UserId>) -> Self {
        Self {
            post_id: PostId::new(),
            message,
            author,
            created_at: Utc::now(),
            comments: Vec::new(),
            likes: Vec::new(),
        }
    }

    /// Append a comment to the end of the list
    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Toggle a user's like marker; returns true when the post is now liked
    pub fn toggle_like(&mut self, user_id: UserId) -> bool {
        if let Some(pos) = self.likes.iter().position(|id| *id == user_id) {
            self.likes.remove(pos);
            false
        } else {
            self.likes.push(user_id);
            true
        }
    }

    /// Whether the given user currently likes this post
    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.contains(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_is_empty() {
        let post = Post::new("howdy!".to_string(), None);
        assert_eq!(post.message, "howdy!");
        assert!(post.comments.is_empty());
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_comments_keep_append_order() {
        let mut post = Post::new("howdy!".to_string(), None);
        post.append_comment(Comment::new("first".to_string(), None));
        post.append_comment(Comment::new("second".to_string(), None));
        post.append_comment(Comment::new("third".to_string(), None));

        let messages: Vec<&str> = post.comments.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_like_toggles_and_stays_unique() {
        let mut post = Post::new("howdy!".to_string(), None);
        let user = UserId::new();

        assert!(post.toggle_like(user));
        assert!(post.is_liked_by(&user));
        assert_eq!(post.likes.len(), 1);

        // A second toggle removes the marker rather than duplicating it
        assert!(!post.toggle_like(user));
        assert!(!post.is_liked_by(&user));
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_likes_from_different_users_accumulate() {
        let mut post = Post::new("howdy!".to_string(), None);
        let alice = UserId::new();
        let bob = UserId::new();

        post.toggle_like(alice);
        post.toggle_like(bob);
        assert_eq!(post.likes.len(), 2);

        post.toggle_like(alice);
        assert_eq!(post.likes.len(), 1);
        assert!(post.is_liked_by(&bob));
    }
}
