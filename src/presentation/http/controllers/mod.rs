// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;
pub mod session;
pub mod slug;
pub mod tags;
