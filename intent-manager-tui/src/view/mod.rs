//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。
//!
//!     layout.rs               // 标题栏 + 卡片列表 + 状态栏，弹窗最后绘制在最上层
//!     pages/intents.rs        // 卡片列表与尾部“新建”锚点
//!     components/modal.rs     // 查看 / 创建 / 编辑弹窗
//!     components/statusbar.rs // 快捷键提示与状态消息
//!     theme.rs                // 深色 / 浅色配色
//!

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
