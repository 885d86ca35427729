//! 快捷键配置
//!
//! 宿主布局里的每个操作入口都对应这里的一个绑定，
//! 入口上的按键提示由 [`KeyBinding::label`] 生成。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 按键提示文本，如 "Ctrl+S"
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) if self.modifiers.is_empty() => c.to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            other => format!("{other:?}"),
        };

        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("Alt+");
        }
        label.push_str(&key);
        label
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 卡片列表
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const DELETE_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const DELETE_CANCEL: KeyBinding = KeyBinding::key(KeyCode::Char('n'));

    // 弹窗
    pub const MODAL_SUBMIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
    pub const MODAL_CANCEL: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const MODAL_CLOSE: KeyBinding = KeyBinding::ctrl(KeyCode::Char('w'));
}
