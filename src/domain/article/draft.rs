// src/domain/article/draft.rs
use serde::{Deserialize, Serialize};

/// Unsaved article state kept on the author's machine between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub slug: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            slug: slug.into(),
        }
    }

    /// Nothing worth autosaving: both title and content are empty.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}
