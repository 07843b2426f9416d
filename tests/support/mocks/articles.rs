// tests/support/mocks/articles.rs
use async_trait::async_trait;
use fumi_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use fumi_core::domain::errors::{DomainError, DomainResult};
use fumi_core::domain::tag::TagContent;
use fumi_core::domain::user::UserId;
use std::sync::Mutex;

/// 読み書き両方を実装するインメモリ記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticles {
    rows: Mutex<Vec<Article>>,
    next_id: Mutex<i64>,
    author_lookups: Mutex<u32>,
}

impl InMemoryArticles {
    pub fn seed(&self, article: Article) {
        let mut rows = self.rows.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(article.id.0);
        rows.push(article);
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.rows.lock().unwrap().clone()
    }

    pub fn author_lookups(&self) -> u32 {
        *self.author_lookups.lock().unwrap()
    }

    fn newest_first(&self) -> Vec<Article> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        rows
    }

    fn ensure_slug_free(rows: &[Article], slug: Option<&ArticleSlug>, id: Option<ArticleId>) -> DomainResult<()> {
        if let Some(slug) = slug {
            if rows
                .iter()
                .any(|a| a.slug.as_ref() == Some(slug) && Some(a.id) != id)
            {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        Self::ensure_slug_free(&rows, article.slug.as_ref(), None)?;

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = Article {
            id: ArticleId::new(*next_id)?,
            title: article.title,
            content: article.content,
            slug: article.slug,
            author_id: article.author_id,
            author_name: Some(article.author_name),
            tags: article.tags,
            created_at: article.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(Some(slug)) = &update.slug {
            Self::ensure_slug_free(&rows, Some(slug), Some(update.id))?;
        }
        let article = rows
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(tags) = update.tags {
            article.tags = tags;
        }
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.snapshot().into_iter().find(|a| a.id == id))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|a| a.slug.as_ref() == Some(slug)))
    }

    async fn find_author(&self, id: ArticleId) -> DomainResult<Option<UserId>> {
        *self.author_lookups.lock().unwrap() += 1;
        Ok(self
            .snapshot()
            .into_iter()
            .find(|a| a.id == id)
            .map(|a| a.author_id))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.newest_first())
    }

    async fn list_range(&self, offset: u64, limit: u32) -> DomainResult<Vec<Article>> {
        Ok(self
            .newest_first()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn list_by_tag(&self, tag: &TagContent) -> DomainResult<Vec<Article>> {
        Ok(self
            .newest_first()
            .into_iter()
            .filter(|a| a.tags.contains(tag))
            .collect())
    }
}

/// すべての読み取りで永続化エラーを返すリポジトリ
pub struct FailingArticleRepo;

fn backend_down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(
        "connection to 10.0.0.5:5432 refused".into(),
    ))
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        backend_down()
    }
    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        backend_down()
    }
    async fn find_author(&self, _id: ArticleId) -> DomainResult<Option<UserId>> {
        backend_down()
    }
    async fn list(&self) -> DomainResult<Vec<Article>> {
        backend_down()
    }
    async fn list_range(&self, _offset: u64, _limit: u32) -> DomainResult<Vec<Article>> {
        backend_down()
    }
    async fn list_by_tag(&self, _tag: &TagContent) -> DomainResult<Vec<Article>> {
        backend_down()
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        backend_down()
    }
    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        backend_down()
    }
    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        backend_down()
    }
}
