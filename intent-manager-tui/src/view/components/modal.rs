//! 弹窗组件
//!
//! 同一个弹窗承担查看 / 创建 / 编辑三种模式，字段内容全部取自核心库的表单。

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use intent_manager_core::modal::Field;
use intent_manager_core::{Modal, ModalMode};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

const MIN_WIDTH: u16 = 50;

/// 渲染弹窗（如果弹窗打开）
pub fn render(app: &App, frame: &mut Frame) {
    let modal = app.registry.modal();
    if !modal.is_open() {
        return;
    }

    let texts = t();
    let title = match modal.mode() {
        ModalMode::View => texts.modal.view_title,
        ModalMode::Create => texts.modal.create_title,
        ModalMode::Edit => texts.modal.edit_title,
        ModalMode::Closed => return,
    };

    let mut lines = Vec::new();
    for (index, field) in modal.form().fields().iter().enumerate() {
        push_field(&mut lines, field, index == modal.focus());
    }

    if modal.mode() != ModalMode::View && !modal.is_submittable() {
        lines.push(Line::styled(
            format!("  ⚠ {}", texts.modal.required),
            Styles::notice(),
        ));
    }
    lines.push(Line::from(""));
    lines.push(footer(modal));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX).max(MIN_WIDTH);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::overlay_border())
        .style(Styles::overlay());

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 字段标签按名称翻译，未知字段使用宿主给出的标签
fn field_label(field: &Field) -> &str {
    let texts = t();
    match field.name() {
        "title" => texts.modal.field_title,
        "expressions" => texts.modal.field_expressions,
        "answer" => texts.modal.field_answer,
        _ => field.label(),
    }
}

fn push_field(lines: &mut Vec<Line<'static>>, field: &Field, focused: bool) {
    let texts = t();

    let mut label = vec![Span::styled(field_label(field).to_string(), Styles::muted())];
    if field.is_multiline() {
        label.push(Span::styled(format!(" ({})", texts.modal.one_per_line), Styles::muted()));
    }
    if field.is_read_only() {
        label.push(Span::styled(format!(" · {}", texts.modal.read_only), Styles::muted()));
    }
    lines.push(Line::from(label));

    let style = Styles::field(focused);

    let value = field.value();
    let rows: Vec<&str> = value.split('\n').collect();
    let last = rows.len() - 1;
    for (i, row) in rows.into_iter().enumerate() {
        let cursor = if focused && !field.is_read_only() && i == last { "▎" } else { "" };
        lines.push(Line::styled(format!("  {row}{cursor}"), style));
    }
    lines.push(Line::from(""));
}

/// 操作提示：提交按钮禁用时灰显
fn footer(modal: &Modal) -> Line<'static> {
    let texts = t();
    let controls = modal.controls();
    let mut spans = vec![Span::raw("  ")];

    if let Some(submit) = modal.submit_control() {
        let verb = match modal.mode() {
            ModalMode::Edit => texts.hints.save,
            _ => texts.hints.create,
        };
        let key_style = if submit.is_disabled() { Styles::muted() } else { Styles::hint_key() };
        spans.push(Span::styled(submit.affordance().hint.clone(), key_style));
        spans.push(Span::styled(format!(" {verb} │ "), Styles::hint_desc()));
    }

    spans.push(Span::styled(controls.cancel.hint.clone(), Styles::hint_key()));
    spans.push(Span::styled(format!(" {} │ ", texts.hints.cancel), Styles::hint_desc()));
    spans.push(Span::styled(controls.close.hint.clone(), Styles::hint_key()));
    spans.push(Span::styled(format!(" {}", texts.hints.close), Styles::hint_desc()));

    Line::from(spans)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::sync::Arc;

    use intent_manager_core::{IntentBody, ManualClock};

    use super::*;
    use crate::backend::AppConfig;

    #[test]
    fn test_field_rows_follow_multiline_value() {
        let mut app = App::new(AppConfig::default(), Arc::new(ManualClock::at_epoch())).unwrap();
        let id = app
            .registry
            .create(IntentBody::new("Greeting", ["hi", "你好你好"], "Hello!"))
            .unwrap();
        app.registry.view(id);

        let modal = app.registry.modal();
        let field = modal.form().field("expressions").unwrap();
        let mut lines = Vec::new();
        push_field(&mut lines, field, false);

        // 标签 + 两行内容 + 空行
        assert_eq!(lines.len(), 4);
        // 两个空格缩进加四个宽字符
        assert_eq!(lines[2].width(), 10);
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(60, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
    }
}
