//! 卡片展示状态

use crate::host::Affordance;

/// 删除确认状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    /// 已点击删除图标，等待确认或取消
    PendingConfirmation,
}

/// 卡片上定位到的操作入口
#[derive(Debug, Clone)]
pub struct CardAffordances {
    pub edit: Option<Affordance>,
    pub delete: Affordance,
    pub confirm: Affordance,
    pub cancel: Affordance,
}

/// 卡片（记录自己的展示元素）
#[derive(Debug, Clone)]
pub struct Card {
    pub(crate) title_label: String,
    pub(crate) updated_label: String,
    pub(crate) delete_flag: bool,
    pub(crate) affordances: CardAffordances,
}

impl Card {
    pub(crate) fn new(title: &str, affordances: CardAffordances) -> Self {
        Self {
            title_label: title.to_string(),
            updated_label: "seconds ago".to_string(),
            delete_flag: false,
            affordances,
        }
    }

    /// 标题文本
    pub fn title_label(&self) -> &str {
        &self.title_label
    }

    /// “Last Updated” 文本
    pub fn updated_label(&self) -> &str {
        &self.updated_label
    }

    /// 是否显示删除警告
    pub fn is_delete_flagged(&self) -> bool {
        self.delete_flag
    }

    pub fn affordances(&self) -> &CardAffordances {
        &self.affordances
    }
}
