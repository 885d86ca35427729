//! 弹窗更新逻辑

use intent_manager_core::Submission;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if !app.registry.modal().is_open() {
        return;
    }

    match msg {
        ModalMessage::Close | ModalMessage::Cancel => {
            app.registry.close_modal();
            app.clear_status();
        }

        ModalMessage::Submit => handle_submit(app),

        ModalMessage::NextField => app.registry.modal_mut().next_field(),
        ModalMessage::PrevField => app.registry.modal_mut().prev_field(),
        ModalMessage::Input(c) => app.registry.modal_mut().input(c),
        ModalMessage::Newline => app.registry.modal_mut().newline(),
        ModalMessage::Backspace => app.registry.modal_mut().backspace(),
    }
}

/// 触发提交按钮；未能提交时只提示，弹窗保持打开
fn handle_submit(app: &mut App) {
    match app.registry.submit() {
        Some(Submission::Created(id)) => {
            app.select_id(id);
            app.set_status(t().status.created);
        }
        Some(Submission::Edited(id)) => {
            app.select_id(id);
            app.set_status(t().status.saved);
        }
        None => {
            let modal = app.registry.modal();
            // 查看模式没有提交入口；编辑目标已移除时弹窗已关闭
            if modal.mode().action().is_none() {
                return;
            }
            if modal.is_submittable() {
                app.set_status(t().status.submit_failed);
            } else {
                app.set_status(t().status.incomplete);
            }
        }
    }
}
