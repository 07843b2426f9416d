// src/application/authoring/slug_watch.rs
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{sync::watch, task::JoinHandle};

use crate::application::ports::slug::SlugAvailability;

/// Quiet period after the last slug edit before availability is checked.
pub const SLUG_CHECK_DEBOUNCE: Duration = Duration::from_millis(500);

/// Debounces slug availability checks and publishes the latest result on a
/// watch channel. A failed check publishes `false`.
pub struct DebouncedSlugChecker {
    checker: Arc<dyn SlugAvailability>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    available: Arc<watch::Sender<bool>>,
}

impl DebouncedSlugChecker {
    pub fn new(checker: Arc<dyn SlugAvailability>) -> Self {
        Self::with_delay(checker, SLUG_CHECK_DEBOUNCE)
    }

    pub fn with_delay(checker: Arc<dyn SlugAvailability>, delay: Duration) -> Self {
        let (available, _) = watch::channel(true);
        Self {
            checker,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            available: Arc::new(available),
        }
    }

    /// Latest published availability; `true` before any check completes.
    pub fn is_available(&self) -> bool {
        *self.available.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.available.subscribe()
    }

    /// Schedule a check of `slug`, superseding any check still waiting out
    /// its delay. An empty slug cancels pending checks and counts as available.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, slug: impl Into<String>) -> JoinHandle<()> {
        let slug = slug.into();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if slug.trim().is_empty() {
            self.available.send_replace(true);
            return tokio::spawn(async {});
        }

        let latest = Arc::clone(&self.generation);
        let checker = Arc::clone(&self.checker);
        let available = Arc::clone(&self.available);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if latest.load(Ordering::SeqCst) != generation {
                return;
            }

            let result = match checker.is_available(&slug).await {
                Ok(result) => result,
                Err(err) => {
                    tracing::warn!(slug = %slug, error = %err, "slug availability check failed");
                    false
                }
            };
            tracing::debug!(slug = %slug, available = result, "slug availability checked");
            available.send_replace(result);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationResult, error::ApplicationError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingChecker {
        taken: Vec<&'static str>,
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SlugAvailability for RecordingChecker {
        async fn is_available(&self, slug: &str) -> ApplicationResult<bool> {
            self.calls.lock().unwrap().push(slug.to_string());
            if self.fail {
                return Err(ApplicationError::infrastructure("backend unreachable"));
            }
            Ok(!self.taken.contains(&slug))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_edit_is_checked() {
        let checker = Arc::new(RecordingChecker {
            taken: vec!["hello-world"],
            ..Default::default()
        });
        let watcher = DebouncedSlugChecker::new(checker.clone());

        let first = watcher.schedule("h");
        let second = watcher.schedule("hello");
        tokio::time::sleep(Duration::from_millis(200)).await;
        let last = watcher.schedule("hello-world");

        first.await.unwrap();
        second.await.unwrap();
        last.await.unwrap();

        assert_eq!(*checker.calls.lock().unwrap(), vec!["hello-world".to_string()]);
        assert!(!watcher.is_available());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_is_checked_before_the_delay() {
        let checker = Arc::new(RecordingChecker::default());
        let watcher = DebouncedSlugChecker::new(checker.clone());

        let handle = watcher.schedule("fresh");
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(checker.calls.lock().unwrap().is_empty());

        handle.await.unwrap();
        assert_eq!(checker.calls.lock().unwrap().len(), 1);
        assert!(watcher.is_available());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_check_reports_unavailable() {
        let checker = Arc::new(RecordingChecker {
            fail: true,
            ..Default::default()
        });
        let watcher = DebouncedSlugChecker::new(checker);
        let mut updates = watcher.subscribe();

        watcher.schedule("anything").await.unwrap();

        assert!(updates.has_changed().unwrap());
        assert!(!*updates.borrow_and_update());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_slug_cancels_pending_check() {
        let checker = Arc::new(RecordingChecker {
            taken: vec!["taken"],
            ..Default::default()
        });
        let watcher = DebouncedSlugChecker::new(checker.clone());

        let pending = watcher.schedule("taken");
        watcher.schedule("").await.unwrap();
        pending.await.unwrap();

        assert!(checker.calls.lock().unwrap().is_empty());
        assert!(watcher.is_available());
    }
}
