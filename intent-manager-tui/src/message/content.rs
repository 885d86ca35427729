//! 内容面板消息
//!
//! 卡片列表中的操作：选择、查看、新建、编辑、两步删除

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项（“新建”锚点）
    SelectLast,
    /// Enter：卡片上为查看，锚点上为新建
    Confirm,

    // ========== 卡片操作 ==========
    /// 新建记录
    Add,
    /// 编辑当前选中卡片
    Edit,
    /// 请求删除当前选中卡片
    Delete,
    /// 确认删除
    ConfirmDelete,
    /// 取消删除
    CancelDelete,
}
