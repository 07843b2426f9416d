// src/application/authoring/draft_store.rs
use std::sync::Arc;

use crate::{application::ports::storage::KeyValueStorage, domain::article::Draft};

/// Storage key holding the single in-progress draft.
pub const DRAFT_KEY: &str = "article_draft";

/// Persists the draft being edited. Storage failures are logged and
/// swallowed; losing a draft must never interrupt editing.
#[derive(Clone)]
pub struct DraftStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl DraftStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn save(&self, draft: &Draft) {
        let json = match serde_json::to_string(draft) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize article draft");
                return;
            }
        };
        if let Err(err) = self.storage.set(DRAFT_KEY, &json) {
            tracing::warn!(error = %err, "failed to save article draft");
        }
    }

    /// `None` when nothing is stored or the stored value is unreadable.
    pub fn load(&self) -> Option<Draft> {
        let raw = match self.storage.get(DRAFT_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read article draft");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(draft) => Some(draft),
            Err(err) => {
                tracing::warn!(error = %err, "discarding corrupt article draft");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.storage.remove(DRAFT_KEY) {
            tracing::warn!(error = %err, "failed to clear article draft");
        }
    }
}
