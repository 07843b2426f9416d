// src/domain/tag/entity.rs
use crate::domain::tag::value_objects::{TagContent, TagId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub content: TagContent,
}
