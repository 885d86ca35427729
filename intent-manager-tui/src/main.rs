//! Intent Manager TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置文件 (`backend/`)
//!
//! 记录、弹窗与卡片状态全部由 `intent-manager-core` 的 `Registry` 持有。
//!
//!
//! main.rs 的执行顺序：
//!
//!     LocalConfigService::load()  // 读取配置；文件损坏时直接报错退出
//!     init_logging()              // 日志写入文件，标准输出留给终端界面
//!     Runtime::new() + enter()    // 记录的自刷新任务需要 tokio runtime
//!     model::App::new()           // 创建注册表与弹窗
//!     init_terminal()
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     save config                 // 主题 / 语言有变化时保存

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use intent_manager_core::SystemClock;

use backend::{ConfigService, LocalConfigService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<()> {
    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;

    // 2. 日志
    let log_path = init_logging(&config.log_level)?;
    log::info!("Intent Manager starting, logging to {}", log_path.display());

    set_theme(config.theme);
    match Language::from_code(&config.language) {
        Some(language) => set_language(language),
        None => log::warn!("Unknown language {:?}, falling back to en-US", config.language),
    }

    // 3. 自刷新任务所需的 runtime
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    // 4. 创建应用实例
    let mut app = model::App::new(config.clone(), Arc::new(SystemClock))?;

    // 5. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if app.config != config {
        if let Err(e) = config_service.save(&app.config) {
            log::warn!("Failed to save config: {e:#}");
        }
    }

    if let Err(ref e) = result {
        log::error!("Intent Manager exited with error: {e:#}");
    } else {
        log::info!("Intent Manager exited");
    }
    result
}
