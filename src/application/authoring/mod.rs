//! Client-side article authoring: local drafts, live slug availability and
//! the editor that ties them to the article commands.
mod draft_store;
mod editor;
mod slug_watch;

pub use draft_store::{DRAFT_KEY, DraftStore};
pub use editor::ArticleEditor;
pub use slug_watch::{DebouncedSlugChecker, SLUG_CHECK_DEBOUNCE};
