// src/application/queries/comments/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{CommentDto, CommentNodeDto},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleId,
        comment::{
            CommentFilter, CommentId, CommentRepository, MAX_THREAD_DEPTH, build_comment_tree,
            prune_deeper_than,
        },
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommentsQuery {
    pub article_id: Option<i64>,
    pub id: Option<i64>,
}

pub struct CommentTreeQuery {
    pub article_id: i64,
}

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let filter = CommentFilter {
            article_id: query.article_id.map(ArticleId::new).transpose()?,
            id: query.id.map(CommentId::new).transpose()?,
        };
        let comments = self.comment_repo.list(filter).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn comment_tree(&self, query: CommentTreeQuery) -> ApplicationResult<Vec<CommentNodeDto>> {
        let filter = CommentFilter {
            article_id: Some(ArticleId::new(query.article_id)?),
            id: None,
        };
        let comments = self.comment_repo.list(filter).await?;
        let mut forest = build_comment_tree(&comments);
        let cut = prune_deeper_than(&mut forest, MAX_THREAD_DEPTH);
        if cut > 0 {
            tracing::warn!(
                article_id = query.article_id,
                cut,
                "comments nested past the thread limit were left out"
            );
        }
        Ok(CommentNodeDto::forest(&forest))
    }
}
