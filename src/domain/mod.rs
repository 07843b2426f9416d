pub mod article;
pub mod comment;
pub mod errors;
pub mod specification;
pub mod tag;
pub mod user;
