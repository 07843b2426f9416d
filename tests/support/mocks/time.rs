// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use fumi_core::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// 決定論的なタイムスタンプを返す
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// 呼び出しごとに 1 秒進む時計（作成順を created_at に反映させる）
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn stepping() -> Self {
        Self {
            now: Mutex::new(fixed_now()),
            step: Duration::seconds(1),
        }
    }

    pub fn frozen() -> Self {
        Self {
            now: Mutex::new(fixed_now()),
            step: Duration::zero(),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        let current = *now;
        *now += self.step;
        current
    }
}
