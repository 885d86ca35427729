//! 主布局渲染
//!
//! 标题栏、卡片列表、状态栏自上而下排列，弹窗最后绘制。

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    let [banner, cards, status] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
            .areas(frame.area());

    render_banner(frame, banner);
    render_card_list(app, frame, cards);
    components::statusbar::render(app, frame, status);

    components::modal::render(app, frame);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let text = format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"));
    frame.render_widget(Paragraph::new(text).style(Styles::banner()), area);
}

/// 列表标题带记录数，每次绘制时按当前语言取文本
pub fn list_title(app: &App) -> String {
    format!(" {} ({}) ", t().intents.title, app.registry.len())
}

/// 卡片列表外框
fn render_card_list(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(list_title(app))
        .title_style(Styles::card_title())
        .borders(Borders::ALL)
        .border_style(Styles::frame(!app.registry.modal().is_open()));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    pages::intents::render(app, frame, inner);
}
