// src/domain/tag/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_TAGS_PER_ARTICLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("tag id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Display text of a tag; tags are unique by this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagContent(String);

impl TagContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagContent> for String {
    fn from(value: TagContent) -> Self {
        value.0
    }
}

/// Tags attached to one article, at most [`MAX_TAGS_PER_ARTICLE`], duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(Vec<TagContent>);

impl TagList {
    pub fn new<I, S>(values: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<TagContent> = Vec::new();
        for value in values {
            let tag = TagContent::new(value)?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        if tags.len() > MAX_TAGS_PER_ARTICLE {
            return Err(DomainError::Validation(format!(
                "an article can carry at most {MAX_TAGS_PER_ARTICLE} tags"
            )));
        }
        Ok(Self(tags))
    }

    pub fn as_slice(&self) -> &[TagContent] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|tag| tag.as_str().to_string()).collect()
    }
}

impl From<TagList> for Vec<TagContent> {
    fn from(value: TagList) -> Self {
        value.0
    }
}
