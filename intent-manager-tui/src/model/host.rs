//! 界面声明的宿主布局
//!
//! 每个操作入口都由快捷键配置生成，按键提示直接取自绑定。

use intent_manager_core::{
    Affordance, CardTemplate, Container, FieldSpec, HostLayout, ModalActions,
};

use crate::event::keymap::{DefaultKeymap, KeyBinding};
use crate::i18n::t;

fn affordance(binding: &KeyBinding) -> Option<Affordance> {
    Some(Affordance::new(binding.label()))
}

/// 卡片列表页面的宿主布局
pub fn intents_layout() -> HostLayout {
    let texts = t();

    HostLayout {
        container: Some(Container {
            title: texts.intents.title.to_string(),
            anchor: Affordance::new(DefaultKeymap::NAV_CONFIRM.label()),
        }),
        new_record: affordance(&DefaultKeymap::ACTION_ADD),
        modal: ModalActions {
            create: affordance(&DefaultKeymap::MODAL_SUBMIT),
            edit: affordance(&DefaultKeymap::MODAL_SUBMIT),
            cancel: affordance(&DefaultKeymap::MODAL_CANCEL),
            close: affordance(&DefaultKeymap::MODAL_CLOSE),
        },
        card: CardTemplate {
            edit: affordance(&DefaultKeymap::ACTION_EDIT),
            delete: affordance(&DefaultKeymap::ACTION_DELETE),
            confirm: affordance(&DefaultKeymap::DELETE_CONFIRM),
            cancel: affordance(&DefaultKeymap::DELETE_CANCEL),
        },
        fields: vec![
            FieldSpec::single("title", texts.modal.field_title),
            FieldSpec::multiline("expressions", texts.modal.field_expressions),
            FieldSpec::single("answer", texts.modal.field_answer),
        ],
    }
}
