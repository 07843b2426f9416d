// src/application/authoring/editor.rs
use std::sync::Arc;

use tokio::sync::watch;

use super::{DebouncedSlugChecker, DraftStore};
use crate::{
    application::{
        commands::articles::{ArticleCommandService, CreateArticleCommand},
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        ports::slug::SlugAvailability,
    },
    domain::{
        article::{ArticleSlug, Draft, MAX_TITLE_LENGTH, generate_slug},
        tag::TagList,
    },
};

/// State of the "new article" form.
///
/// Until the author types a slug by hand it follows the title. Each slug
/// change schedules a debounced availability check, and every edit with a
/// non-empty title or content is autosaved as a draft.
pub struct ArticleEditor {
    draft: Draft,
    tags: Vec<String>,
    slug_edited: bool,
    restored: bool,
    drafts: DraftStore,
    slug_checker: DebouncedSlugChecker,
    availability: Arc<dyn SlugAvailability>,
    commands: Arc<ArticleCommandService>,
}

impl ArticleEditor {
    /// Open the editor, restoring a saved draft when one exists.
    pub fn open(
        drafts: DraftStore,
        availability: Arc<dyn SlugAvailability>,
        commands: Arc<ArticleCommandService>,
    ) -> Self {
        let slug_checker = DebouncedSlugChecker::new(Arc::clone(&availability));
        Self::with_checker(drafts, slug_checker, availability, commands)
    }

    pub fn with_checker(
        drafts: DraftStore,
        slug_checker: DebouncedSlugChecker,
        availability: Arc<dyn SlugAvailability>,
        commands: Arc<ArticleCommandService>,
    ) -> Self {
        let restored = drafts.load();
        let was_restored = restored.is_some();
        let draft = restored.unwrap_or_default();
        let slug_edited = !draft.slug.is_empty() && draft.slug != generate_slug(&draft.title);
        if was_restored {
            tracing::info!(title = %draft.title, "restored article draft");
        }

        Self {
            draft,
            tags: Vec::new(),
            slug_edited,
            restored: was_restored,
            drafts,
            slug_checker,
            availability,
            commands,
        }
    }

    /// Whether opening the editor picked up a previously saved draft.
    pub fn restored_draft(&self) -> bool {
        self.restored
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Result of the most recent slug availability check.
    pub fn slug_available(&self) -> bool {
        self.slug_checker.is_available()
    }

    pub fn slug_updates(&self) -> watch::Receiver<bool> {
        self.slug_checker.subscribe()
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.chars().take(MAX_TITLE_LENGTH).collect();
        if !self.slug_edited {
            let slug = generate_slug(&self.draft.title);
            if slug != self.draft.slug {
                self.draft.slug = slug;
                self.slug_checker.schedule(self.draft.slug.clone());
            }
        }
        self.autosave();
    }

    /// A hand-typed slug stops the title from driving it.
    pub fn set_slug(&mut self, slug: &str) {
        self.slug_edited = true;
        self.draft.slug = slug.to_string();
        self.slug_checker.schedule(self.draft.slug.clone());
        self.autosave();
    }

    pub fn set_content(&mut self, content: &str) {
        self.draft.content = content.to_string();
        self.autosave();
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    fn autosave(&self) {
        if !self.draft.is_blank() {
            self.drafts.save(&self.draft);
        }
    }

    /// Create the article from the current form. The saved draft is cleared
    /// only once the article has been stored; on any error it stays.
    pub async fn publish(&mut self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<ArticleDto> {
        let actor = actor.ok_or_else(|| ApplicationError::unauthorized("sign in to publish"))?;

        if self.draft.title.trim().is_empty() {
            return Err(ApplicationError::validation("title is required"));
        }
        if self.draft.content.trim().is_empty() {
            return Err(ApplicationError::validation("content is required"));
        }
        TagList::new(self.tags.iter().cloned())?;

        if let Some(slug) = ArticleSlug::optional(self.draft.slug.clone())? {
            if !self.check_now(&slug).await {
                return Err(ApplicationError::conflict(format!(
                    "slug '{slug}' is already taken"
                )));
            }
        }

        let command = CreateArticleCommand {
            title: self.draft.title.clone(),
            content: self.draft.content.clone(),
            slug: Some(self.draft.slug.clone()),
            tags: self.tags.clone(),
        };
        let created = self.commands.create_article(actor, command).await?;

        self.drafts.clear();
        self.draft = Draft::default();
        self.tags.clear();
        self.slug_edited = false;
        self.restored = false;
        Ok(created)
    }

    async fn check_now(&self, slug: &ArticleSlug) -> bool {
        match self.availability.is_available(slug.as_str()).await {
            Ok(available) => available,
            Err(err) => {
                tracing::warn!(slug = %slug, error = %err, "slug availability check failed");
                false
            }
        }
    }
}
