// src/domain/article/services/mod.rs
mod permission;
mod slug;

pub use permission::ArticlePermissionService;
pub use slug::ArticleSlugService;
