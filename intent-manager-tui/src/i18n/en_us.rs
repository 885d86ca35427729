//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HintTexts, IntentsTexts, ModalTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Intent Manager",
        yes: "Yes",
        no: "No",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        select: "Select",
        view: "View",
        new: "New",
        edit: "Edit",
        delete: "Delete",
        confirm: "Confirm",
        cancel: "Cancel",
        create: "Create",
        save: "Save",
        close: "Close",
        next_field: "Next field",
        newline: "New line",
        theme: "Theme",
        language: "Language",
        quit: "Quit",
    },

    // ========================================================================
    // 卡片列表
    // ========================================================================
    intents: IntentsTexts {
        title: "Intents",
        new_card: "+ New intent",
        empty: "No intents yet",
        updated: "Updated",
        expressions: "expressions",
        delete_prompt: "Delete this intent?",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        view_title: "View Intent",
        create_title: "New Intent",
        edit_title: "Edit Intent",
        field_title: "Title",
        field_expressions: "Expressions",
        field_answer: "Answer",
        one_per_line: "one per line",
        read_only: "read-only",
        required: "Every field is required",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        created: "Intent created",
        saved: "Intent saved",
        deleted: "Intent deleted",
        delete_cancelled: "Deletion cancelled",
        delete_requested: "Press y to delete, n to keep",
        incomplete: "Fill in every field first",
        submit_failed: "Could not save the intent, see the log",
    },
};
