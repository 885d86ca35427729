//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭图标
    Close,

    /// 取消按钮
    Cancel,

    /// 当前模式的提交按钮（创建 / 编辑）
    Submit,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 输入字符
    Input(char),

    /// 多行字段换行
    Newline,

    /// 删除字符（Backspace）
    Backspace,
}
