//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event -> Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod content;        // 卡片列表中的子消息
//!         mod modal;          // 弹窗中的子消息
//!
//!
//! 除按键外，主循环还会把记录的自刷新 tick 翻译成 `AppMessage::Tick(id)`，
//! 与按键消息走同一条 update 路径。
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
