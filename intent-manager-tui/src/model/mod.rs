//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态
//!         mod host;           // 宿主布局（操作入口 + 表单字段）
//!         mod selection;      // 卡片列表选择状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、App 主状态
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit,        // 决定应用是否应该退出
//!         registry,           // intent-manager-core 的注册表，持有记录与弹窗
//!         selection,          // 当前选中第几张卡片，最后一格是“新建”锚点
//!         status_message,     // 状态栏消息
//!         config,             // 主题 / 语言
//!     }
//!
//!     记录、卡片文本、弹窗模式都由核心库维护，
//!     Model 层只额外保存选择位置与状态栏消息。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、宿主布局
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     核心库在构造时“定位”宿主的操作入口，缺少任何一个都会失败。
//!     界面在 host.rs 里用快捷键配置声明这些入口：
//!
//!         新建记录        Alt+A（或锚点上 Enter）
//!         提交            Ctrl+S
//!         取消 / 关闭     Esc / Ctrl+W
//!         编辑 / 删除     Alt+E / Alt+D
//!         确认 / 取消删除 y / n
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod host;
mod selection;

pub use app::App;
pub use host::intents_layout;
pub use selection::CardSelection;
