//! 卡片列表页面视图

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use intent_manager_core::Intent;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染卡片列表，最后一项总是“新建”锚点
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let width = usize::from(area.width.saturating_sub(4));

    let mut items: Vec<ListItem> = app.registry.iter().map(|intent| card_item(intent, width)).collect();

    if items.is_empty() {
        items.push(ListItem::new(vec![
            Line::styled(format!("  {}", texts.intents.empty), Styles::muted()),
            Line::from(""),
        ]));
    }
    items.push(anchor_item(app));

    let selected = if app.registry.is_empty() && app.anchor_selected() {
        // 空提示占了一格
        app.selection.selected + 1
    } else {
        app.selection.selected
    };

    let list = List::new(items).highlight_style(Styles::card_selected());
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// 单张卡片：标题、更新时间、删除确认
fn card_item(intent: &Intent, width: usize) -> ListItem<'static> {
    let texts = t();
    let card = intent.card();
    let affordances = card.affordances();

    let mut title = vec![Span::styled(
        format!("  {}", truncate(card.title_label(), width)),
        Styles::card_title(),
    )];
    if let Some(edit) = &affordances.edit {
        title.push(Span::styled(format!("  [{}]", edit.hint), Styles::muted()));
    }
    title.push(Span::styled(format!(" [{}]", affordances.delete.hint), Styles::muted()));

    let mut lines = vec![
        Line::from(title),
        Line::styled(
            format!(
                "    {} {} · {} {}",
                texts.intents.updated,
                card.updated_label(),
                intent.expressions().len(),
                texts.intents.expressions
            ),
            Styles::muted(),
        ),
    ];

    if card.is_delete_flagged() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {} ", texts.intents.delete_prompt),
                Styles::danger(),
            ),
            Span::styled(format!("[{}]", affordances.confirm.hint), Styles::hint_key()),
            Span::styled(format!(" {}  ", texts.common.yes), Styles::hint_desc()),
            Span::styled(format!("[{}]", affordances.cancel.hint), Styles::hint_key()),
            Span::styled(format!(" {}", texts.common.no), Styles::hint_desc()),
        ]));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

/// 尾部“新建”锚点
fn anchor_item(app: &App) -> ListItem<'static> {
    let texts = t();
    let anchor = app.registry.list().anchor();
    let trigger = app.registry.new_record_affordance();

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("  {}", texts.intents.new_card),
            Styles::anchor(),
        ),
        Span::styled(format!("  [{} / {}]", anchor.hint, trigger.hint), Styles::muted()),
    ]))
}

/// 按显示宽度截断
fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            out.push('…');
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_display_width() {
        assert_eq!(truncate("Greeting", 20), "Greeting");
        assert_eq!(truncate("Greeting", 4), "Gree…");
        assert_eq!(truncate("你好世界", 4), "你好…");
    }
}
