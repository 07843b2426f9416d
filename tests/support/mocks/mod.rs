// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod articles;
pub mod comments;
pub mod session;
pub mod tags;
pub mod time;

// 時刻関連
pub use time::{ManualClock, fixed_now};

// セッション関連
pub use session::{
    ADMIN_TOKEN, AUTHOR_TOKEN, READER_TOKEN, StaticSessionAuthority, admin_id, author_id,
    reader_id,
};

// リポジトリ関連
pub use articles::{FailingArticleRepo, InMemoryArticles};
pub use comments::InMemoryComments;
pub use tags::InMemoryTags;
