//! 时间来源
//!
//! 记录的 `last_updated` 与“距上次更新时间”都从注入的时钟读取，
//! 测试中使用 [`ManualClock`] 手动推进时间。

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};

/// 时钟 trait
pub trait Clock: Send + Sync + fmt::Debug {
    /// 当前时间
    fn now(&self) -> DateTime<Utc>;
}

/// 共享时钟句柄
pub type SharedClock = Arc<dyn Clock>;

/// 系统时钟
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 手动时钟（测试用）
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// 从 UNIX 纪元开始的手动时钟
    pub fn at_epoch() -> Self {
        Self::new(DateTime::<Utc>::default())
    }

    /// 向前推进指定秒数
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += TimeDelta::seconds(secs);
    }

    /// 设置为指定时间
    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::at_epoch();
        let start = clock.now();
        clock.advance_secs(90);
        assert_eq!((clock.now() - start).num_seconds(), 90);
    }
}
