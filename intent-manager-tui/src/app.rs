//! 主循环
//!
//! 每一轮依次执行：绘制、退出检查、消化刷新 tick、等待输入（最多 100 ms）。
//! 刷新任务在 runtime 工作线程上只负责发送记录 ID，
//! 卡片文本的改写和其它状态变更都发生在这里的 `dispatch` 中。

use std::time::Duration;

use anyhow::{Context, Result};

use crate::event::{handle_event, poll_event};
use crate::message::AppMessage;
use crate::model::App;
use crate::update::update;
use crate::util::Term;
use crate::view;

/// 输入轮询间隔，同时决定 tick 的最大处理延迟
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| view::render(app, frame))
            .context("failed to draw frame")?;

        for id in app.drain_ticks() {
            dispatch(app, AppMessage::Tick(id));
        }

        if let Some(event) = poll_event(POLL_INTERVAL)? {
            let msg = handle_event(event, app);
            dispatch(app, msg);
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, msg: AppMessage) {
    if !matches!(msg, AppMessage::Tick(_) | AppMessage::Noop) {
        log::trace!("dispatch {msg:?}");
    }
    update(app, msg);
}
