//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HintTexts, IntentsTexts, ModalTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "意图管理器",
        yes: "是",
        no: "否",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        select: "选择",
        view: "查看",
        new: "新建",
        edit: "编辑",
        delete: "删除",
        confirm: "确认",
        cancel: "取消",
        create: "创建",
        save: "保存",
        close: "关闭",
        next_field: "下一字段",
        newline: "换行",
        theme: "主题",
        language: "语言",
        quit: "退出",
    },

    // ========================================================================
    // 卡片列表
    // ========================================================================
    intents: IntentsTexts {
        title: "意图",
        new_card: "+ 新建意图",
        empty: "还没有意图",
        updated: "更新于",
        expressions: "条表达式",
        delete_prompt: "删除这个意图？",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        view_title: "查看意图",
        create_title: "新建意图",
        edit_title: "编辑意图",
        field_title: "标题",
        field_expressions: "触发表达式",
        field_answer: "回答",
        one_per_line: "每行一条",
        read_only: "只读",
        required: "所有字段均为必填",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        created: "已创建意图",
        saved: "已保存意图",
        deleted: "已删除意图",
        delete_cancelled: "已取消删除",
        delete_requested: "按 y 删除，按 n 保留",
        incomplete: "请先填写所有字段",
        submit_failed: "无法保存意图，详见日志",
    },
};
