//! 记录（Intent）
//!
//! 一条记录拥有自己的卡片、删除确认状态与自刷新任务，
//! 编辑和查看时借用注册表的共享弹窗。
//!
//! 生命周期钩子：
//!     - `wire_events()`     构造完成时调用，启动每秒一次的自刷新
//!     - `teardown_events()` 从注册表移除时调用（Drop 时再次调用，无副作用）
//!
//! 删除为两步：`request_delete()` 标记卡片并进入待确认；`cancel_delete()` 撤销；
//! `confirm_delete()` 只在待确认时生效，避免取消之后迟到的确认点击删除记录。

mod age;
mod body;
mod card;

pub use age::humanize_elapsed;
pub use body::IntentBody;
pub use card::{Card, CardAffordances, DeletionState};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::clock::SharedClock;
use crate::error::{CoreError, CoreResult};
use crate::host::{require, CardTemplate};
use crate::id::IntentId;
use crate::modal::{Modal, ModalAction, ModalMode, SubmitTarget};
use crate::refresh::{RefreshSender, RefreshTask, REFRESH_PERIOD};
use crate::registry::RegistryLink;

/// 记录
#[derive(Debug)]
pub struct Intent {
    id: IntentId,
    registry_tag: Uuid,
    body: IntentBody,
    last_updated: DateTime<Utc>,
    clock: SharedClock,
    card: Card,
    deletion: DeletionState,
    refresh_sender: RefreshSender,
    refresh: RefreshTask,
}

/// 记录构造器
pub struct IntentBuilder<'a> {
    body: IntentBody,
    registry: Option<&'a mut RegistryLink>,
    card: Option<&'a CardTemplate>,
}

impl<'a> IntentBuilder<'a> {
    /// 所属注册表（必需）
    #[must_use]
    pub fn registry(mut self, link: &'a mut RegistryLink) -> Self {
        self.registry = Some(link);
        self
    }

    /// 卡片模板（删除 / 确认 / 取消入口必需）
    #[must_use]
    pub fn card(mut self, template: &'a CardTemplate) -> Self {
        self.card = Some(template);
        self
    }

    /// 构造记录：分配 ID、生成卡片、接好事件并启动自刷新
    pub fn build(self) -> CoreResult<Intent> {
        let registry = self.registry.ok_or(CoreError::MissingRegistry)?;

        let template = self.card.cloned().unwrap_or_default();
        let affordances = CardAffordances {
            edit: template.edit.clone(),
            delete: require(template.delete.as_ref(), "delete icon DOM element")?.clone(),
            confirm: require(template.confirm.as_ref(), "confirm deletion button")?.clone(),
            cancel: require(template.cancel.as_ref(), "cancel deletion button")?.clone(),
        };

        let id = registry.ids.allocate();
        let mut intent = Intent {
            id,
            registry_tag: registry.ids.tag(),
            card: Card::new(&self.body.title, affordances),
            body: self.body,
            last_updated: registry.clock.now(),
            clock: registry.clock.clone(),
            deletion: DeletionState::Idle,
            refresh_sender: registry.refresh.clone(),
            refresh: RefreshTask::default(),
        };
        intent.wire_events();

        log::debug!("Intent {id} built: {:?}", intent.body.title);
        Ok(intent)
    }
}

impl Intent {
    /// 开始构造一条记录
    pub fn builder<'a>(body: IntentBody) -> IntentBuilder<'a> {
        IntentBuilder {
            body,
            registry: None,
            card: None,
        }
    }

    pub fn id(&self) -> IntentId {
        self.id
    }

    pub(crate) fn registry_tag(&self) -> Uuid {
        self.registry_tag
    }

    pub fn body(&self) -> &IntentBody {
        &self.body
    }

    pub fn title(&self) -> &str {
        &self.body.title
    }

    pub fn expressions(&self) -> &[String] {
        &self.body.expressions
    }

    pub fn answer(&self) -> &str {
        &self.body.answer
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn deletion(&self) -> DeletionState {
        self.deletion
    }

    /// 自刷新任务是否在运行
    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_active()
    }

    /// 距上次更新的粗粒度文本
    pub fn time_since_update(&self) -> String {
        let elapsed = self.clock.now() - self.last_updated;
        humanize_elapsed(elapsed.num_milliseconds().div_euclid(1000))
    }

    // ========== 生命周期 ==========

    /// 启动自刷新任务
    pub fn wire_events(&mut self) {
        self.refresh.cancel();
        self.refresh = RefreshTask::start(self.id, REFRESH_PERIOD, self.refresh_sender.clone());
    }

    /// 取消自刷新任务
    pub fn teardown_events(&mut self) {
        if self.refresh.is_active() {
            log::debug!("Intent {} refresh task cancelled", self.id);
        }
        self.refresh.cancel();
    }

    /// 一次刷新：重写卡片上的更新时间
    pub fn refresh_card(&mut self) {
        self.card.updated_label = format!("{} ago", self.time_since_update());
    }

    // ========== 查看 / 编辑 ==========

    /// 点击标题：以只读查看模式打开弹窗
    pub fn open_view(&self, modal: &mut Modal) {
        modal.open(ModalMode::View);
        modal.disable();
        modal.fill(&self.body);
    }

    /// 点击编辑图标：以编辑模式打开弹窗并填入当前内容
    ///
    /// 卡片没有编辑入口时不做任何事。
    pub fn open_edit(&self, modal: &mut Modal) {
        if self.card.affordances.edit.is_none() {
            return;
        }
        modal.open(ModalMode::Edit);
        modal.fill(&self.body);
        modal.attach(SubmitTarget::Edit(self.id));
    }

    /// 编辑提交
    ///
    /// 弹窗不可提交或提交目标不是本记录时返回 `false`。
    /// 成功时整体替换 body、重置更新时间、刷新标题并关闭弹窗。
    pub fn submit_edit(&mut self, modal: &mut Modal) -> bool {
        let Some((target, data)) = modal.take_submission(ModalAction::Edit) else {
            return false;
        };
        if target != SubmitTarget::Edit(self.id) {
            return false;
        }

        self.body = IntentBody::from_form(&data);
        self.last_updated = self.clock.now();
        self.card.title_label.clone_from(&self.body.title);
        modal.close();

        log::info!("Intent {} edited: {:?}", self.id, self.body.title);
        true
    }

    // ========== 删除确认 ==========

    /// 点击删除图标：标记卡片，等待确认
    pub fn request_delete(&mut self) {
        self.card.delete_flag = true;
        self.deletion = DeletionState::PendingConfirmation;
    }

    /// 取消删除
    pub fn cancel_delete(&mut self) {
        self.card.delete_flag = false;
        self.deletion = DeletionState::Idle;
    }

    /// 确认删除：仅在待确认时返回 `true`，由注册表执行移除
    pub fn confirm_delete(&self) -> bool {
        self.deletion == DeletionState::PendingConfirmation
    }
}

impl Drop for Intent {
    fn drop(&mut self) {
        self.teardown_events();
    }
}
