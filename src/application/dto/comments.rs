use crate::domain::comment::{Comment, CommentNode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub content: String,
    pub article_id: i64,
    pub author_id: Uuid,
    #[serde(default)]
    pub author_name: Option<String>,
    /// Parent comment; the web client reads it under this exact key.
    #[serde(rename = "parent_Id", alias = "parent_id", default)]
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            content: comment.content.into_inner(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            author_name: comment.author_name,
            parent_id: comment.parent_id.map(Into::into),
            created_at: comment.created_at,
        }
    }
}

/// Recursive, so it is left out of the OpenAPI components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNodeDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub depth: usize,
    pub can_reply: bool,
    pub children: Vec<CommentNodeDto>,
}

impl CommentNodeDto {
    /// Convert a built forest, walking it with an explicit stack.
    pub fn forest(nodes: &[CommentNode]) -> Vec<Self> {
        let mut roots = Vec::with_capacity(nodes.len());
        for root in nodes {
            let mut stack: Vec<(&CommentNode, Vec<Self>)> = vec![(root, Vec::new())];

            while let Some((node, built)) = stack.last_mut() {
                let node: &CommentNode = *node;
                if let Some(child) = node.children.get(built.len()) {
                    stack.push((child, Vec::with_capacity(child.children.len())));
                    continue;
                }

                let Some((node, children)) = stack.pop() else {
                    break;
                };
                let dto = Self {
                    comment: node.comment.clone().into(),
                    depth: node.depth,
                    can_reply: node.can_reply(),
                    children,
                };
                match stack.last_mut() {
                    Some((_, siblings)) => siblings.push(dto),
                    None => roots.push(dto),
                }
            }
        }
        roots
    }
}
