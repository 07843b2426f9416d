// tests/support/mocks/tags.rs
use async_trait::async_trait;
use fumi_core::domain::errors::{DomainError, DomainResult};
use fumi_core::domain::tag::{Tag, TagContent, TagId, TagRepository};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryTags {
    rows: Mutex<Vec<Tag>>,
}

impl InMemoryTags {
    pub fn contents(&self) -> Vec<String> {
        let mut contents: Vec<String> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.content.as_str().to_string())
            .collect();
        contents.sort();
        contents
    }

    fn push(rows: &mut Vec<Tag>, content: TagContent) -> DomainResult<Tag> {
        let tag = Tag {
            id: TagId::new(rows.len() as i64 + 1)?,
            content,
        };
        rows.push(tag.clone());
        Ok(tag)
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.content.as_str().cmp(b.content.as_str()));
        Ok(rows)
    }

    async fn find_by_content(&self, content: &TagContent) -> DomainResult<Option<Tag>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| &t.content == content)
            .cloned())
    }

    async fn insert(&self, content: TagContent) -> DomainResult<Tag> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|t| t.content == content) {
            return Err(DomainError::Conflict("tag already exists".into()));
        }
        Self::push(&mut rows, content)
    }

    async fn ensure(&self, contents: &[TagContent]) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        for content in contents {
            if !rows.iter().any(|t| &t.content == content) {
                Self::push(&mut rows, content.clone())?;
            }
        }
        Ok(())
    }
}
