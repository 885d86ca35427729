//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         pub mod keymap;     // 快捷键映射（也用于生成宿主布局的按键提示）
//!
//!
//!     当接收到键盘事件时，转入 handle_key_event()
//!     判断：
//!         - 有弹窗打开时，调用 handle_modal_keys 处理
//!             · 查看模式只响应关闭、取消与字段切换
//!             · 创建 / 编辑模式下 Ctrl+S 提交，字符键写入焦点字段
//!         - 全局快捷键，就地处理
//!         - 其余交给 handle_content_keys（卡片列表）
//!             · 选中卡片待确认删除时，y / n 优先
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
