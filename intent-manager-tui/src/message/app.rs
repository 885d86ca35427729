//! 应用主消息枚举

use intent_manager_core::IntentId;

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 卡片列表相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 某条记录的自刷新 tick
    Tick(IntentId),

    /// 切换主题
    ToggleTheme,

    /// 切换语言
    ToggleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
