//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **卡片列表归 `intents.*`**
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**：动作词，按键名称来自快捷键配置
//!
//! 卡片上的“距上次更新”文本由核心库生成，不参与翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示动作词
    pub hints: HintTexts,
    /// 卡片列表页面
    pub intents: IntentsTexts,
    /// 弹窗
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 动作描述（与按键名称组合成提示）
pub struct HintTexts {
    pub select: &'static str,
    pub view: &'static str,
    pub new: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub create: &'static str,
    pub save: &'static str,
    pub close: &'static str,
    pub next_field: &'static str,
    pub newline: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 卡片列表
// ============================================================================

pub struct IntentsTexts {
    pub title: &'static str,
    /// 尾部锚点卡片
    pub new_card: &'static str,
    pub empty: &'static str,
    /// "Updated 3 minutes ago" 中的前缀
    pub updated: &'static str,
    /// 触发表达式数量后缀
    pub expressions: &'static str,
    pub delete_prompt: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub view_title: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub field_title: &'static str,
    pub field_expressions: &'static str,
    pub field_answer: &'static str,
    /// 多行字段说明
    pub one_per_line: &'static str,
    pub read_only: &'static str,
    pub required: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

pub struct StatusTexts {
    pub created: &'static str,
    pub saved: &'static str,
    pub deleted: &'static str,
    pub delete_cancelled: &'static str,
    pub delete_requested: &'static str,
    pub incomplete: &'static str,
    /// 表单完整但记录无法构造
    pub submit_failed: &'static str,
}
