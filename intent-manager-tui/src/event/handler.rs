//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use intent_manager_core::{DeletionState, ModalMode};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.registry.modal().is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('q'))
    {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }

    handle_content_keys(key, app)
}

/// 处理卡片列表的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 选中卡片处于待确认删除时，y / n 优先
    let pending = app
        .selected_intent()
        .is_some_and(|intent| intent.deletion() == DeletionState::PendingConfirmation);
    if pending {
        if DefaultKeymap::DELETE_CONFIRM.matches(&key) {
            return AppMessage::Content(ContentMessage::ConfirmDelete);
        }
        if DefaultKeymap::DELETE_CANCEL.matches(&key) {
            return AppMessage::Content(ContentMessage::CancelDelete);
        }
    }

    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    let modal = app.registry.modal();

    if DefaultKeymap::MODAL_CLOSE.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    if DefaultKeymap::MODAL_CANCEL.matches(&key) {
        return AppMessage::Modal(ModalMessage::Cancel);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => return AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => return AppMessage::Modal(ModalMessage::PrevField),
        _ => {}
    }

    // 查看模式只读，只响应关闭与字段切换
    if modal.mode() == ModalMode::View {
        return AppMessage::Noop;
    }

    if DefaultKeymap::MODAL_SUBMIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Submit);
    }

    match key.code {
        KeyCode::Enter => {
            let multiline = modal
                .form()
                .fields()
                .get(modal.focus())
                .is_some_and(|field| field.is_multiline());
            if multiline {
                AppMessage::Modal(ModalMessage::Newline)
            } else {
                AppMessage::Modal(ModalMessage::NextField)
            }
        }
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventState;
    use intent_manager_core::{IntentBody, ManualClock};

    use super::*;
    use crate::backend::AppConfig;

    fn app() -> App {
        App::new(AppConfig::default(), Arc::new(ManualClock::at_epoch())).unwrap()
    }

    fn press(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(KeyModifiers::NONE, code)
    }

    fn with_intent() -> App {
        let mut app = app();
        app.registry
            .create(IntentBody::new("Greeting", ["hi"], "Hello!"))
            .unwrap();
        app
    }

    #[test]
    fn test_release_events_are_ignored() {
        let app = app();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(event, &app), AppMessage::Noop);
    }

    #[test]
    fn test_list_keys() {
        let app = with_intent();

        assert_eq!(handle_event(key(KeyCode::Char('q')), &app), AppMessage::Quit);
        assert_eq!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('a')), &app),
            AppMessage::Content(ContentMessage::Add)
        );
        assert_eq!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('e')), &app),
            AppMessage::Content(ContentMessage::Edit)
        );
        assert_eq!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('d')), &app),
            AppMessage::Content(ContentMessage::Delete)
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        );
        assert_eq!(
            handle_event(press(KeyModifiers::ALT, KeyCode::Char('t')), &app),
            AppMessage::ToggleTheme
        );
    }

    #[test]
    fn test_confirm_keys_only_while_pending() {
        let mut app = with_intent();
        assert_eq!(handle_event(key(KeyCode::Char('y')), &app), AppMessage::Noop);

        let id = app.selected_id().unwrap();
        app.registry.request_delete(id);
        assert_eq!(
            handle_event(key(KeyCode::Char('y')), &app),
            AppMessage::Content(ContentMessage::ConfirmDelete)
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('n')), &app),
            AppMessage::Content(ContentMessage::CancelDelete)
        );
    }

    #[test]
    fn test_create_modal_keys() {
        let mut app = app();
        app.registry.open_create();

        assert_eq!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyModifiers::SHIFT, KeyCode::Char('Q')), &app),
            AppMessage::Modal(ModalMessage::Input('Q'))
        );
        assert_eq!(
            handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('s')), &app),
            AppMessage::Modal(ModalMessage::Submit)
        );
        assert_eq!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Cancel)
        );
        assert_eq!(
            handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('w')), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        // 焦点在单行的 title 上
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::NextField)
        );
    }

    #[test]
    fn test_enter_in_multiline_field_is_newline() {
        let mut app = app();
        app.registry.open_create();
        app.registry.modal_mut().next_field();

        assert_eq!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Newline)
        );
    }

    #[test]
    fn test_view_modal_ignores_editing_keys() {
        let mut app = with_intent();
        let id = app.selected_id().unwrap();
        app.registry.view(id);

        assert_eq!(handle_event(key(KeyCode::Char('x')), &app), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyModifiers::CONTROL, KeyCode::Char('s')), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::Modal(ModalMessage::NextField)
        );
        assert_eq!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Cancel)
        );
    }
}
