//! 卡片列表选择状态
//!
//! 位置范围为 `0..=卡片数`，最后一格是“新建”锚点。

/// 选择状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardSelection {
    pub selected: usize,
}

impl CardSelection {
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, slots: usize) {
        if self.selected + 1 < slots {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, slots: usize) {
        self.selected = slots.saturating_sub(1);
    }

    /// 列表变短后收回越界的位置
    pub fn clamp(&mut self, slots: usize) {
        self.selected = self.selected.min(slots.saturating_sub(1));
    }
}
