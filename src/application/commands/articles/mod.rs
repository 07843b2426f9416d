// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
