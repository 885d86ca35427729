//! 记录数据

use serde::{Deserialize, Serialize};

use crate::modal::{FieldSource, FieldValue, FormData};
use crate::text::string_to_lines;

/// 记录内容
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntentBody {
    pub title: String,
    /// 触发短语，有序
    pub expressions: Vec<String>,
    pub answer: String,
}

impl IntentBody {
    pub fn new(
        title: impl Into<String>,
        expressions: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            expressions: expressions.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// 从弹窗快照解析
    ///
    /// `expressions` 按行拆分；缺少的键视为空字符串。
    pub fn from_form(data: &FormData) -> Self {
        let text = |key: &str| data.get(key).cloned().unwrap_or_default();

        Self {
            title: text("title"),
            expressions: string_to_lines(data.get("expressions").map_or("", String::as_str)),
            answer: text("answer"),
        }
    }
}

impl FieldSource for IntentBody {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "expressions" => Some(FieldValue::Lines(&self.expressions)),
            "answer" => Some(FieldValue::Text(&self.answer)),
            _ => None,
        }
    }
}
