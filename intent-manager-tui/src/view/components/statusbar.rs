//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use intent_manager_core::{DeletionState, ModalMode};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let separator = || Span::styled(" │ ", Styles::hint_desc());

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in mode_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    // 最近一次操作的结果跟在提示后面
    if let Some(msg) = &app.status_message {
        spans.push(separator());
        spans.push(Span::styled(msg.clone(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::banner());
    frame.render_widget(paragraph, area);
}

/// 当前弹窗模式与选中卡片对应的快捷键提示
fn mode_hints(app: &App) -> Vec<(String, &'static str)> {
    let texts = t();
    let modal = app.registry.modal();
    let mut hints = Vec::new();

    match modal.mode() {
        ModalMode::Closed => {
            hints.push(("↑↓".to_string(), texts.hints.select));

            match app.selected_intent() {
                Some(intent) if intent.deletion() == DeletionState::PendingConfirmation => {
                    let card = intent.card().affordances();
                    hints.push((card.confirm.hint.clone(), texts.hints.confirm));
                    hints.push((card.cancel.hint.clone(), texts.hints.cancel));
                }
                Some(intent) => {
                    let card = intent.card().affordances();
                    hints.push((DefaultKeymap::NAV_CONFIRM.label(), texts.hints.view));
                    if let Some(edit) = &card.edit {
                        hints.push((edit.hint.clone(), texts.hints.edit));
                    }
                    hints.push((card.delete.hint.clone(), texts.hints.delete));
                }
                None => {
                    hints.push((app.registry.list().anchor().hint.clone(), texts.hints.new));
                }
            }

            hints.push((app.registry.new_record_affordance().hint.clone(), texts.hints.new));
            hints.push((DefaultKeymap::TOGGLE_THEME.label(), texts.hints.theme));
            hints.push((DefaultKeymap::TOGGLE_LANGUAGE.label(), texts.hints.language));
            hints.push((DefaultKeymap::QUIT.label(), texts.hints.quit));
        }
        ModalMode::View => {
            hints.push(("Tab".to_string(), texts.hints.next_field));
        }
        ModalMode::Create | ModalMode::Edit => {
            hints.push(("Tab".to_string(), texts.hints.next_field));
            let multiline = modal
                .form()
                .fields()
                .get(modal.focus())
                .is_some_and(|field| field.is_multiline());
            if multiline {
                hints.push((DefaultKeymap::NAV_CONFIRM.label(), texts.hints.newline));
            }
        }
    }

    hints
}
