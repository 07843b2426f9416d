use std::sync::Arc;

use crate::domain::article::{
    ArticleReadRepository,
    services::{ArticlePermissionService, ArticleSlugService},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) permissions: Arc<ArticlePermissionService>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        permissions: Arc<ArticlePermissionService>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
            permissions,
        }
    }
}
