pub mod articles;
pub mod auth;
pub mod comments;
pub mod tags;
pub mod users;

pub use articles::{ArticleDto, PermissionDto, SlugAvailabilityDto};
pub use auth::AuthenticatedUser;
pub use comments::{CommentDto, CommentNodeDto};
pub use tags::{TagDto, TagWithArticlesDto};
pub use users::UserProfileDto;
