// src/application/feed.rs
//! Infinite-scroll article feed.
use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Duration, Utc};

use crate::application::{
    dto::ArticleDto,
    ports::{feed::FeedSource, time::Clock},
};

pub const FEED_PAGE_SIZE: u32 = 10;

/// Minimum spacing between two loads.
pub fn feed_throttle() -> Duration {
    Duration::seconds(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched; `added` excludes rows already in the feed.
    Loaded { fetched: usize, added: usize },
    /// The previous load was less than the throttle interval ago.
    Throttled,
    /// A short page was seen earlier; nothing left to load.
    Exhausted,
    /// The source failed; the cursor did not move.
    Failed,
}

/// Scroll state of the viewport showing the feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollPosition {
    pub fn at_bottom(&self) -> bool {
        self.offset + self.viewport_height >= self.content_height
    }
}

pub struct PaginatedFeed {
    source: Arc<dyn FeedSource>,
    clock: Arc<dyn Clock>,
    page_size: u32,
    page: u32,
    items: Vec<ArticleDto>,
    seen: HashSet<i64>,
    has_more: bool,
    last_load: Option<DateTime<Utc>>,
}

impl PaginatedFeed {
    pub fn new(source: Arc<dyn FeedSource>, clock: Arc<dyn Clock>) -> Self {
        Self::with_page_size(source, clock, FEED_PAGE_SIZE)
    }

    pub fn with_page_size(source: Arc<dyn FeedSource>, clock: Arc<dyn Clock>, page_size: u32) -> Self {
        Self {
            source,
            clock,
            page_size: page_size.max(1),
            page: 1,
            items: Vec::new(),
            seen: HashSet::new(),
            has_more: true,
            last_load: None,
        }
    }

    pub fn items(&self) -> &[ArticleDto] {
        &self.items
    }

    /// Next page to load, starting at 1.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Load the next page when the viewport reached the bottom.
    pub async fn on_scroll(&mut self, position: ScrollPosition) -> Option<LoadOutcome> {
        if position.at_bottom() {
            Some(self.load_more().await)
        } else {
            None
        }
    }

    pub async fn load_more(&mut self) -> LoadOutcome {
        if !self.has_more {
            return LoadOutcome::Exhausted;
        }

        let now = self.clock.now();
        if let Some(last) = self.last_load {
            if now - last < feed_throttle() {
                return LoadOutcome::Throttled;
            }
        }
        let size = u64::from(self.page_size);
        let from = u64::from(self.page - 1) * size;
        let to = from + size - 1;

        let rows = match self.source.fetch_range(from, to).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(page = self.page, error = %err, "failed to load feed page");
                return LoadOutcome::Failed;
            }
        };
        self.last_load = Some(now);

        let fetched = rows.len();
        if fetched < self.page_size as usize {
            self.has_more = false;
        }
        if fetched > 0 {
            self.page += 1;
        }

        let mut added = 0;
        for article in rows {
            if self.seen.insert(article.id) {
                self.items.push(article);
                added += 1;
            }
        }

        tracing::debug!(fetched, added, has_more = self.has_more, "feed page loaded");
        LoadOutcome::Loaded { fetched, added }
    }
}
