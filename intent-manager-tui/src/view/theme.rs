//! 主题和样式定义
//!
//! 视图层只通过 `Styles` 取样式，不直接读取调色板。

use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static LIGHT_THEME: AtomicBool = AtomicBool::new(false);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 切换到另一个主题
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    LIGHT_THEME.store(theme == Theme::Light, Ordering::Relaxed);
}

/// 获取当前主题
pub fn current_theme() -> Theme {
    if LIGHT_THEME.load(Ordering::Relaxed) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// 调色板
#[derive(Debug)]
struct Palette {
    surface: Color,
    text: Color,
    frame: Color,
    accent: Color,
    card_bg: Color,
    card_fg: Color,
    /// 尾部“新建”锚点
    anchor: Color,
    /// 删除确认
    danger: Color,
    /// 表单未填完
    notice: Color,
    faded: Color,
    key: Color,
    key_desc: Color,
}

const DARK: Palette = Palette {
    surface: Color::Rgb(24, 26, 31),
    text: Color::Rgb(220, 220, 214),
    frame: Color::Rgb(70, 74, 82),
    accent: Color::Rgb(97, 175, 239),
    card_bg: Color::Rgb(44, 62, 90),
    card_fg: Color::White,
    anchor: Color::Rgb(152, 195, 121),
    danger: Color::Rgb(224, 108, 117),
    notice: Color::Rgb(229, 192, 123),
    faded: Color::Rgb(125, 130, 140),
    key: Color::Rgb(229, 192, 123),
    key_desc: Color::Rgb(175, 178, 185),
};

const LIGHT: Palette = Palette {
    surface: Color::Rgb(250, 250, 248),
    text: Color::Rgb(40, 44, 52),
    frame: Color::Rgb(200, 202, 206),
    accent: Color::Rgb(30, 100, 200),
    card_bg: Color::Rgb(214, 230, 250),
    card_fg: Color::Black,
    anchor: Color::Rgb(46, 125, 50),
    danger: Color::Rgb(198, 40, 40),
    notice: Color::Rgb(160, 110, 0),
    faded: Color::Rgb(120, 120, 120),
    key: Color::Rgb(150, 80, 0),
    key_desc: Color::Rgb(90, 90, 90),
};

fn palette() -> &'static Palette {
    current_theme().palette()
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 卡片列表边框，弹窗打开时变暗
    pub fn frame(active: bool) -> Style {
        let p = palette();
        Style::default().fg(if active { p.accent } else { p.frame })
    }

    /// 选中的卡片
    pub fn card_selected() -> Style {
        let p = palette();
        Style::default().bg(p.card_bg).fg(p.card_fg).add_modifier(Modifier::BOLD)
    }

    /// 卡片标题与列表标题
    pub fn card_title() -> Style {
        Style::default().fg(palette().text).add_modifier(Modifier::BOLD)
    }

    pub fn anchor() -> Style {
        Style::default().fg(palette().anchor).add_modifier(Modifier::BOLD)
    }

    pub fn danger() -> Style {
        Style::default().fg(palette().danger).add_modifier(Modifier::BOLD)
    }

    pub fn notice() -> Style {
        Style::default().fg(palette().notice)
    }

    /// 次要文本（更新时间、字段标签）
    pub fn muted() -> Style {
        Style::default().fg(palette().faded)
    }

    /// 标题栏与状态栏
    pub fn banner() -> Style {
        let p = palette();
        Style::default().bg(p.accent).fg(p.surface)
    }

    /// 弹窗底板
    pub fn overlay() -> Style {
        Style::default().bg(palette().surface)
    }

    pub fn overlay_border() -> Style {
        Style::default().fg(palette().accent)
    }

    /// 字段值，焦点字段高亮
    pub fn field(focused: bool) -> Style {
        let p = palette();
        if focused {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.text)
        }
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default().fg(palette().key).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(palette().key_desc)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::from_str::<Theme>("\"dark\"").unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Light);
    }
}
