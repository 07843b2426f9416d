// src/application/ports/mod.rs
pub mod feed;
pub mod session;
pub mod slug;
pub mod storage;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type FeedSourcePort = dyn feed::FeedSource;
pub type SessionAuthorityPort = dyn session::SessionAuthority;
pub type SlugAvailabilityPort = dyn slug::SlugAvailability;
pub type KeyValueStoragePort = dyn storage::KeyValueStorage;
