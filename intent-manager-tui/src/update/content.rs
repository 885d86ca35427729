//! 内容面板更新逻辑
//!
//! 卡片列表中的操作消息转成注册表的高层操作

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let slots = app.slots();

    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.selection.select_previous(),
        ContentMessage::SelectNext => app.selection.select_next(slots),
        ContentMessage::SelectFirst => app.selection.select_first(),
        ContentMessage::SelectLast => app.selection.select_last(slots),
        ContentMessage::Confirm => handle_confirm(app),

        // ========== 卡片操作 ==========
        ContentMessage::Add => handle_add(app),
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::ConfirmDelete => handle_confirm_delete(app),
        ContentMessage::CancelDelete => handle_cancel_delete(app),
    }
}

/// Enter：锚点上新建，卡片上查看
fn handle_confirm(app: &mut App) {
    match app.selected_id() {
        Some(id) => {
            app.registry.view(id);
        }
        None if app.anchor_selected() => handle_add(app),
        None => {}
    }
}

fn handle_add(app: &mut App) {
    app.clear_status();
    app.registry.open_create();
}

fn handle_edit(app: &mut App) {
    if let Some(id) = app.selected_id() {
        app.clear_status();
        app.registry.edit(id);
    }
}

fn handle_delete(app: &mut App) {
    if let Some(id) = app.selected_id() {
        app.registry.request_delete(id);
        app.set_status(t().status.delete_requested);
    }
}

fn handle_confirm_delete(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };

    if app.registry.confirm_delete(id) {
        let slots = app.slots();
        app.selection.clamp(slots);
        app.set_status(t().status.deleted);
    }
}

fn handle_cancel_delete(app: &mut App) {
    if let Some(id) = app.selected_id() {
        app.registry.cancel_delete(id);
        app.set_status(t().status.delete_cancelled);
    }
}
