//! PostgreSQL Repository Implementations
//!
//! Posts are stored as one row each with the embedded comment list and
//! like set in JSONB columns. Comment append and like toggle are single
//! UPDATE statements, so two concurrent mutations of the same post
//! serialize in the database and neither is lost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{Comment, Post};
use crate::domain::repository::PostRepository;
use crate::error::FeedResult;
use kernel::id::{PostId, UserId};

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgFeedRepository {
    async fn insert(&self, post: &Post) -> FeedResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                message,
                author_user_id,
                created_at,
                comments,
                likes
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.message)
        .bind(post.author.as_ref().map(|id| *id.as_uuid()))
        .bind(post.created_at)
        .bind(Json(
            post.comments.iter().map(CommentDoc::from).collect::<Vec<_>>(),
        ))
        .bind(Json(
            post.likes.iter().map(|id| *id.as_uuid()).collect::<Vec<_>>(),
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> FeedResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                message,
                author_user_id,
                created_at,
                comments,
                likes
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_all(&self) -> FeedResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                message,
                author_user_id,
                created_at,
                comments,
                likes
            FROM posts
            ORDER BY created_at DESC, post_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn append_comment(
        &self,
        post_id: &PostId,
        comment: &Comment,
    ) -> FeedResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET comments = comments || $2
            WHERE post_id = $1
            RETURNING
                post_id,
                message,
                author_user_id,
                created_at,
                comments,
                likes
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(Json(vec![CommentDoc::from(comment)]))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn toggle_like(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> FeedResult<Option<Post>> {
        // `@>` tests membership, `||` adds, `- text` removes; one
        // statement, so a racing double toggle cannot duplicate a marker
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET likes = CASE
                    WHEN likes @> $2 THEN likes - $3
                    ELSE likes || $2
                END
            WHERE post_id = $1
            RETURNING
                post_id,
                message,
                author_user_id,
                created_at,
                comments,
                likes
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(Json(vec![*user_id.as_uuid()]))
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }
}

// ============================================================================
// Row types
// ============================================================================

/// Embedded comment document as stored in the `comments` JSONB column
#[derive(Debug, Serialize, Deserialize)]
struct CommentDoc {
    message: String,
    author: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentDoc {
    fn from(comment: &Comment) -> Self {
        Self {
            message: comment.message.clone(),
            author: comment.author.map(|id| id.into_uuid()),
            created_at: comment.created_at,
        }
    }
}

impl CommentDoc {
    fn into_comment(self) -> Comment {
        Comment {
            message: self.message,
            author: self.author.map(UserId::from_uuid),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    message: String,
    author_user_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    comments: Json<Vec<CommentDoc>>,
    likes: Json<Vec<Uuid>>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            message: self.message,
            author: self.author_user_id.map(UserId::from_uuid),
            created_at: self.created_at,
            comments: self
                .comments
                .0
                .into_iter()
                .map(CommentDoc::into_comment)
                .collect(),
            likes: self.likes.0.into_iter().map(UserId::from_uuid).collect(),
        }
    }
}
