//! 宿主布局
//!
//! 核心不生成界面，而是在构造时定位宿主提供的元素：
//! 列表容器与其尾部锚点、弹窗的操作入口、“新建”入口、卡片上的操作入口、
//! 以及表单字段。每个操作入口携带一个按键提示，供界面渲染。
//!
//! 缺少必需的入口时，对应组件构造失败（见 [`CoreError::MissingAffordance`]）。

use crate::error::{CoreError, CoreResult};

/// 一个可触发的操作入口
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    /// 按键提示（如 "Ctrl+S"）
    pub hint: String,
}

impl Affordance {
    pub fn new(hint: impl Into<String>) -> Self {
        Self { hint: hint.into() }
    }
}

/// 取出必需的操作入口
pub(crate) fn require<'a>(
    affordance: Option<&'a Affordance>,
    what: &'static str,
) -> CoreResult<&'a Affordance> {
    affordance.ok_or(CoreError::MissingAffordance(what))
}

/// 弹窗的操作入口
#[derive(Debug, Clone, Default)]
pub struct ModalActions {
    /// 创建模式下的提交按钮
    pub create: Option<Affordance>,
    /// 编辑模式下的提交按钮
    pub edit: Option<Affordance>,
    /// 取消按钮
    pub cancel: Option<Affordance>,
    /// 关闭图标
    pub close: Option<Affordance>,
}

/// 卡片上的操作入口
#[derive(Debug, Clone, Default)]
pub struct CardTemplate {
    /// 编辑图标
    pub edit: Option<Affordance>,
    /// 删除图标
    pub delete: Option<Affordance>,
    /// 确认删除按钮
    pub confirm: Option<Affordance>,
    /// 取消删除按钮
    pub cancel: Option<Affordance>,
}

/// 卡片列表容器
#[derive(Debug, Clone)]
pub struct Container {
    /// 容器标题
    pub title: String,
    /// 尾部锚点（新卡片总是插入在它之前）
    pub anchor: Affordance,
}

/// 表单字段定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// 字段名（与记录 body 的键一一对应）
    pub name: &'static str,
    /// 显示标签
    pub label: String,
    /// 是否为多行文本框
    pub multiline: bool,
}

impl FieldSpec {
    pub fn single(name: &'static str, label: impl Into<String>) -> Self {
        Self {
            name,
            label: label.into(),
            multiline: false,
        }
    }

    pub fn multiline(name: &'static str, label: impl Into<String>) -> Self {
        Self {
            name,
            label: label.into(),
            multiline: true,
        }
    }
}

/// 完整的宿主布局
#[derive(Debug, Clone, Default)]
pub struct HostLayout {
    pub container: Option<Container>,
    /// 页面级“新建”入口
    pub new_record: Option<Affordance>,
    pub modal: ModalActions,
    pub card: CardTemplate,
    pub fields: Vec<FieldSpec>,
}

impl HostLayout {
    /// 标准表单字段：title / expressions / answer
    pub fn intent_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::single("title", "Title"),
            FieldSpec::multiline("expressions", "Expressions"),
            FieldSpec::single("answer", "Answer"),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_missing_affordance() {
        let missing: Option<&Affordance> = None;
        assert_eq!(
            require(missing, "delete icon"),
            Err(CoreError::MissingAffordance("delete icon"))
        );
    }

    #[test]
    fn test_intent_fields_match_body_keys() {
        let names: Vec<_> = HostLayout::intent_fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["title", "expressions", "answer"]);
    }
}
