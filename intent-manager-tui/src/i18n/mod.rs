//! 国际化（i18n）模块
//!
//! 每种语言一张静态 `Translations` 表，界面通过 `t()` 读取当前语言的表。
//! 语言保存在配置文件的 `language` 字段中（BCP 47 代码）。

use std::sync::atomic::{AtomicU8, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Language {
    #[default]
    EnUs = 0,
    ZhCn = 1,
}

impl Language {
    /// 切换顺序
    const ALL: [Language; 2] = [Language::EnUs, Language::ZhCn];

    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 接受完整代码或主语言子标签（`zh`）
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| {
            let full = lang.code();
            full == code || full.split('-').next() == Some(code)
        })
    }

    #[must_use]
    pub fn next(self) -> Language {
        let index = (self as usize + 1) % Self::ALL.len();
        Self::ALL[index]
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(Language::EnUs as u8);

/// 当前语言的翻译表
pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang as u8, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhCn,
        _ => Language::EnUs,
    }
}
