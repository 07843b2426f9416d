mod feed;
mod get_by_id;
mod get_by_slug;
mod list;
mod permission;
mod service;
mod slug;

pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{DEFAULT_PAGE_SIZE, ListArticlesQuery, MAX_PAGE_SIZE};
pub use permission::ArticlePermissionQuery;
pub use service::ArticleQueryService;
pub use slug::CheckSlugQuery;
