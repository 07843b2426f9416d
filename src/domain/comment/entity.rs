use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub author_name: Option<String>,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: CommentContent,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub author_name: String,
    pub parent_id: Option<CommentId>,
    pub created_at: DateTime<Utc>,
}
