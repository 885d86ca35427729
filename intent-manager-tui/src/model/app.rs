//! 应用主状态结构

use intent_manager_core::{
    refresh_channel, CoreResult, HostLayout, Intent, IntentId, RefreshReceiver, Registry,
    SharedClock,
};

use super::{intents_layout, CardSelection};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 记录注册表（卡片列表与弹窗）
    pub registry: Registry,

    /// 卡片列表选择状态
    pub selection: CardSelection,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前配置（主题 / 语言切换后在退出时保存）
    pub config: AppConfig,

    /// 自刷新 tick 接收端
    refresh_rx: RefreshReceiver,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig, clock: SharedClock) -> CoreResult<Self> {
        Self::with_layout(config, clock, &intents_layout())
    }

    /// 在给定的宿主布局上创建应用实例
    pub fn with_layout(config: AppConfig, clock: SharedClock, layout: &HostLayout) -> CoreResult<Self> {
        let (refresh_tx, refresh_rx) = refresh_channel();
        let registry = Registry::new(layout, clock, refresh_tx)?;

        Ok(Self {
            should_quit: false,
            registry,
            selection: CardSelection::default(),
            status_message: None,
            config,
            refresh_rx,
        })
    }

    /// 取出所有待处理的刷新 tick
    pub fn drain_ticks(&mut self) -> Vec<IntentId> {
        let mut ticks = Vec::new();
        while let Ok(id) = self.refresh_rx.try_recv() {
            ticks.push(id);
        }
        ticks
    }

    /// 卡片数量加上锚点
    pub fn slots(&self) -> usize {
        self.registry.list().slots()
    }

    /// 当前选中的记录（锚点上为 `None`）
    pub fn selected_intent(&self) -> Option<&Intent> {
        self.registry.at(self.selection.selected)
    }

    pub fn selected_id(&self) -> Option<IntentId> {
        self.selected_intent().map(Intent::id)
    }

    /// 选中是否在“新建”锚点上
    pub fn anchor_selected(&self) -> bool {
        self.selection.selected + 1 == self.slots()
    }

    /// 选中指定记录
    pub fn select_id(&mut self, id: IntentId) {
        if let Some(index) = self.registry.list().ids().iter().position(|&x| x == id) {
            self.selection.selected = index;
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
