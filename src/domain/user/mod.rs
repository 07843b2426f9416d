pub mod entity;
pub mod specifications;
pub mod value_objects;

pub use entity::UserProfile;
pub use specifications::{ActorRole, AuthorOrAdminSpec};
pub use value_objects::{Email, Role, UserId};
