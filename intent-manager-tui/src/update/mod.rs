//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Content(content_msg) => content::update(app, content_msg),
//!             AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
//!             AppMessage::Tick(id) => app.registry.refresh(id),
//!             ...
//!         }
//!     }
//!
//!     使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//!     卡片与弹窗的子消息委托给子模块（content、modal），
//!     子模块只调用注册表的高层操作，不直接改动记录。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use crate::i18n::{current_language, set_language};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::set_theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Tick(id) => {
            // 已移除记录的迟到 tick 直接忽略
            app.registry.refresh(id);
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.next();
            set_theme(app.config.theme);
        }

        AppMessage::ToggleLanguage => {
            let language = current_language().next();
            set_language(language);
            app.config.language = language.code().to_string();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use intent_manager_core::{DeletionState, IntentBody, ManualClock, ModalMode};

    use super::*;
    use crate::backend::AppConfig;
    use crate::i18n::{t, Language};
    use crate::message::{ContentMessage, ModalMessage};
    use crate::model::intents_layout;
    use crate::view::layout::list_title;
    use crate::view::theme::Theme;

    fn app_with_clock() -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at_epoch());
        let app = App::new(AppConfig::default(), clock.clone()).unwrap();
        (app, clock)
    }

    fn content(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            modal(app, ModalMessage::Input(c));
        }
    }

    #[test]
    fn test_create_through_messages() {
        let (mut app, _clock) = app_with_clock();

        // 空列表上只有锚点，Enter 打开创建弹窗
        assert!(app.anchor_selected());
        content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.registry.modal().mode(), ModalMode::Create);

        type_text(&mut app, "Greeting");
        modal(&mut app, ModalMessage::Submit);
        assert_eq!(app.registry.modal().mode(), ModalMode::Create);
        assert!(app.registry.is_empty());
        assert!(app.status_message.is_some());

        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "hi");
        modal(&mut app, ModalMessage::Newline);
        type_text(&mut app, "hello");
        modal(&mut app, ModalMessage::NextField);
        type_text(&mut app, "Hello!!");
        modal(&mut app, ModalMessage::Backspace);
        modal(&mut app, ModalMessage::Submit);

        assert!(!app.registry.modal().is_open());
        assert_eq!(app.registry.len(), 1);
        let intent = app.selected_intent().unwrap();
        assert_eq!(intent.body(), &IntentBody::new("Greeting", ["hi", "hello"], "Hello!"));
        assert_eq!(intent.time_since_update(), "seconds");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let (mut app, _clock) = app_with_clock();

        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "draft");
        modal(&mut app, ModalMessage::Cancel);

        assert!(!app.registry.modal().is_open());
        content(&mut app, ContentMessage::Add);
        assert_eq!(app.registry.modal().data()["title"], "");
    }

    #[test]
    fn test_enter_on_card_views_it() {
        let (mut app, _clock) = app_with_clock();
        app.registry.create(IntentBody::new("a", ["x"], "1")).unwrap();

        content(&mut app, ContentMessage::SelectFirst);
        content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.registry.modal().mode(), ModalMode::View);

        type_text(&mut app, "ignored");
        assert_eq!(app.registry.modal().data()["title"], "a");
        modal(&mut app, ModalMessage::Close);
        assert!(!app.registry.modal().is_open());
    }

    #[test]
    fn test_edit_through_messages() {
        let (mut app, clock) = app_with_clock();
        let id = app.registry.create(IntentBody::new("a", ["x"], "1")).unwrap();

        clock.advance_secs(120);
        content(&mut app, ContentMessage::Edit);
        assert_eq!(app.registry.modal().mode(), ModalMode::Edit);
        type_text(&mut app, "b");
        modal(&mut app, ModalMessage::Submit);

        let intent = app.registry.get(id).unwrap();
        assert_eq!(intent.title(), "ab");
        assert_eq!(intent.card().title_label(), "ab");
        assert_eq!(intent.time_since_update(), "seconds");
    }

    #[test]
    fn test_two_step_delete_through_messages() {
        let (mut app, _clock) = app_with_clock();
        let first = app.registry.create(IntentBody::new("a", ["x"], "1")).unwrap();
        let second = app.registry.create(IntentBody::new("b", ["x"], "2")).unwrap();

        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::Delete);
        assert_eq!(
            app.registry.get(second).unwrap().deletion(),
            DeletionState::PendingConfirmation
        );

        content(&mut app, ContentMessage::CancelDelete);
        content(&mut app, ContentMessage::ConfirmDelete);
        assert!(app.registry.contains(second));

        content(&mut app, ContentMessage::Delete);
        content(&mut app, ContentMessage::ConfirmDelete);
        assert!(!app.registry.contains(second));
        assert_eq!(app.registry.list().ids(), [first]);
        assert_eq!(app.selection.selected, 1);
        assert!(app.anchor_selected());
    }

    #[test]
    fn test_tick_for_removed_intent_is_ignored() {
        let (mut app, clock) = app_with_clock();
        let id = app.registry.create(IntentBody::new("a", ["x"], "1")).unwrap();

        clock.advance_secs(7_200);
        update(&mut app, AppMessage::Tick(id));
        assert_eq!(app.registry.get(id).unwrap().card().updated_label(), "2 hours ago");

        app.registry.remove(id);
        update(&mut app, AppMessage::Tick(id));
        assert!(app.registry.is_empty());
    }

    #[test]
    fn test_toggle_theme_updates_config() {
        let (mut app, _clock) = app_with_clock();
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, Theme::Light);
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, Theme::Dark);
    }

    #[test]
    fn test_toggle_language_retitles_list() {
        let (mut app, _clock) = app_with_clock();
        let before = current_language();

        update(&mut app, AppMessage::ToggleLanguage);
        let after = current_language();
        assert_eq!(after, before.next());
        assert_eq!(app.config.language, after.code());
        assert!(list_title(&app).contains(t().intents.title));

        update(&mut app, AppMessage::ToggleLanguage);
        assert_eq!(current_language(), before);
        assert_eq!(Language::from_code(&app.config.language), Some(before));
        assert!(list_title(&app).contains(t().intents.title));
    }

    #[test]
    fn test_failed_create_keeps_modal_and_reports() {
        let mut layout = intents_layout();
        layout.card.delete = None;
        let mut app =
            App::with_layout(AppConfig::default(), Arc::new(ManualClock::at_epoch()), &layout).unwrap();

        content(&mut app, ContentMessage::Add);
        for (name, value) in [("title", "a"), ("expressions", "x"), ("answer", "1")] {
            app.registry.modal_mut().set_field(name, value);
        }
        assert!(app.registry.modal().is_submittable());

        modal(&mut app, ModalMessage::Submit);
        assert_eq!(app.registry.modal().mode(), ModalMode::Create);
        assert!(app.registry.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_quit() {
        let (mut app, _clock) = app_with_clock();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
