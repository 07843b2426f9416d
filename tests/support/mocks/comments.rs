// tests/support/mocks/comments.rs
use async_trait::async_trait;
use fumi_core::domain::comment::{
    Comment, CommentFilter, CommentId, CommentRepository, NewComment,
};
use fumi_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryComments {
    rows: Mutex<Vec<Comment>>,
    next_id: Mutex<i64>,
}

impl InMemoryComments {
    pub fn seed(&self, comment: Comment) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(comment.id.0);
        self.rows.lock().unwrap().push(comment);
    }

    pub fn snapshot(&self) -> Vec<Comment> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn list(&self, filter: CommentFilter) -> DomainResult<Vec<Comment>> {
        let mut rows: Vec<Comment> = self
            .snapshot()
            .into_iter()
            .filter(|c| filter.article_id.is_none_or(|id| c.article_id == id))
            .filter(|c| filter.id.is_none_or(|id| c.id == id))
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.snapshot().into_iter().find(|c| c.id == id))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = Comment {
            id: CommentId::new(*next_id)?,
            content: comment.content,
            article_id: comment.article_id,
            author_id: comment.author_id,
            author_name: Some(comment.author_name),
            parent_id: comment.parent_id,
            created_at: comment.created_at,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
