// src/domain/user/specifications.rs
use crate::domain::specification::Specification;
use crate::domain::user::value_objects::{Role, UserId};

/// The part of a session that management checks care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorRole {
    pub id: UserId,
    pub role: Role,
}

impl ActorRole {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }
}

/// Author-or-administrator rule shared by articles and comments.
pub struct AuthorOrAdminSpec<'a> {
    actor: Option<&'a ActorRole>,
    author_id: UserId,
}

impl<'a> AuthorOrAdminSpec<'a> {
    pub fn new(actor: Option<&'a ActorRole>, author_id: UserId) -> Self {
        Self { actor, author_id }
    }
}

impl Specification for AuthorOrAdminSpec<'_> {
    fn is_satisfied(&self) -> bool {
        match self.actor {
            None => false,
            Some(actor) => actor.role.is_admin() || actor.id == self.author_id,
        }
    }
}
