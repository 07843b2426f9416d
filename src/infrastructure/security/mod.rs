// src/infrastructure/security/mod.rs
mod session_authority;

pub use session_authority::{PostgresSessionAuthority, hash_session_token};
