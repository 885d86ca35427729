//! 记录的自刷新任务
//!
//! 每条记录持有一个周期任务，每秒把自己的 ID 发到刷新通道；
//! 界面主循环取出 ID 后调用 [`Registry::refresh`](crate::Registry::refresh)
//! 重写卡片上的“距上次更新”文本。
//!
//! 任务句柄保存在记录上：记录被移除或被丢弃时任务随之取消。

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::id::IntentId;

/// 刷新周期
pub const REFRESH_PERIOD: Duration = Duration::from_secs(1);

/// 刷新通道发送端
pub type RefreshSender = mpsc::UnboundedSender<IntentId>;

/// 刷新通道接收端
pub type RefreshReceiver = mpsc::UnboundedReceiver<IntentId>;

/// 创建刷新通道
pub fn refresh_channel() -> (RefreshSender, RefreshReceiver) {
    mpsc::unbounded_channel()
}

/// 可取消的周期刷新任务
#[derive(Debug, Default)]
pub struct RefreshTask {
    handle: Option<AbortHandle>,
}

impl RefreshTask {
    /// 启动任务
    ///
    /// 没有运行中的 tokio runtime 时不启动，卡片文本只在编辑等主动更新时变化。
    pub fn start(id: IntentId, period: Duration, sender: RefreshSender) -> Self {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::warn!("No tokio runtime, refresh task for intent {id} not started");
            return Self::default();
        };

        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if sender.send(id).is_err() {
                    // 接收端已关闭
                    break;
                }
            }
        });

        Self {
            handle: Some(task.abort_handle()),
        }
    }

    /// 取消任务，可重复调用
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
