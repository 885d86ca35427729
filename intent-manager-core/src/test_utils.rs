//! 测试辅助模块
//!
//! 提供标准宿主布局与便捷的注册表工厂方法。

use std::sync::Arc;

use crate::clock::ManualClock;
use crate::host::{Affordance, CardTemplate, Container, HostLayout, ModalActions};
use crate::intent::IntentBody;
use crate::refresh::{refresh_channel, RefreshReceiver};
use crate::registry::Registry;

/// 所有入口齐全的宿主布局
pub fn layout() -> HostLayout {
    HostLayout {
        container: Some(Container {
            title: "Intents".to_string(),
            anchor: Affordance::new("Enter"),
        }),
        new_record: Some(Affordance::new("Alt+A")),
        modal: ModalActions {
            create: Some(Affordance::new("Ctrl+S")),
            edit: Some(Affordance::new("Ctrl+S")),
            cancel: Some(Affordance::new("Esc")),
            close: Some(Affordance::new("Ctrl+W")),
        },
        card: CardTemplate {
            edit: Some(Affordance::new("Alt+E")),
            delete: Some(Affordance::new("Alt+D")),
            confirm: Some(Affordance::new("y")),
            cancel: Some(Affordance::new("n")),
        },
        fields: HostLayout::intent_fields(),
    }
}

pub fn greeting() -> IntentBody {
    IntentBody::new("Greeting", ["hi", "hello"], "Hello!")
}

/// 使用手动时钟的注册表，同时返回时钟与刷新通道接收端
#[allow(clippy::unwrap_used)]
pub fn manual_registry() -> (Registry, Arc<ManualClock>, RefreshReceiver) {
    let clock = Arc::new(ManualClock::at_epoch());
    let (tx, rx) = refresh_channel();
    let registry = Registry::new(&layout(), clock.clone(), tx).unwrap();
    (registry, clock, rx)
}
