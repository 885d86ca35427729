//! 注册表：持有全部记录，居中协调弹窗与卡片列表
//!
//! - 新记录由“新建”入口打开创建模式的弹窗，提交后构造记录并 `add`
//! - `add` 把卡片插入到列表尾部锚点之前，因此视觉顺序即创建顺序
//! - 记录确认删除后由 `remove` 移除卡片与映射，并取消其自刷新任务

use std::collections::HashMap;

use uuid::Uuid;

use crate::clock::SharedClock;
use crate::error::{CoreError, CoreResult};
use crate::host::{require, Affordance, CardTemplate, HostLayout};
use crate::id::{IdAllocator, IntentId};
use crate::intent::{Intent, IntentBody};
use crate::modal::{Modal, ModalAction, ModalMode, SubmitTarget};
use crate::refresh::RefreshSender;

/// 记录构造时需要的注册表上下文：ID 分配器、时钟、刷新通道
#[derive(Debug)]
pub struct RegistryLink {
    pub(crate) ids: IdAllocator,
    pub(crate) clock: SharedClock,
    pub(crate) refresh: RefreshSender,
}

impl RegistryLink {
    pub fn new(clock: SharedClock, refresh: RefreshSender) -> Self {
        // 每个注册表自带随机标签，实例之间不共享任何状态
        Self {
            ids: IdAllocator::new(Uuid::new_v4()),
            clock,
            refresh,
        }
    }

    /// 已分配的 ID 数量
    pub fn issued(&self) -> u64 {
        self.ids.issued()
    }
}

/// 卡片列表：按插入顺序排列的卡片，后面跟着固定的尾部锚点
#[derive(Debug, Clone)]
pub struct CardList {
    title: String,
    anchor: Affordance,
    order: Vec<IntentId>,
}

impl CardList {
    fn new(title: String, anchor: Affordance) -> Self {
        Self {
            title,
            anchor,
            order: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 尾部锚点
    pub fn anchor(&self) -> &Affordance {
        &self.anchor
    }

    /// 卡片 ID（视觉顺序，不含锚点）
    pub fn ids(&self) -> &[IntentId] {
        &self.order
    }

    /// 卡片数量加上锚点
    pub fn slots(&self) -> usize {
        self.order.len() + 1
    }

    fn insert_before_anchor(&mut self, id: IntentId) {
        self.order.push(id);
    }

    fn remove(&mut self, id: IntentId) -> bool {
        let before = self.order.len();
        self.order.retain(|&existing| existing != id);
        self.order.len() != before
    }
}

/// 一次成功提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Created(IntentId),
    Edited(IntentId),
}

/// 注册表
#[derive(Debug)]
pub struct Registry {
    records: HashMap<IntentId, Intent>,
    list: CardList,
    modal: Modal,
    link: RegistryLink,
    card_template: CardTemplate,
    new_record: Affordance,
}

impl Registry {
    /// 在宿主布局上创建注册表及其弹窗
    pub fn new(layout: &HostLayout, clock: SharedClock, refresh: RefreshSender) -> CoreResult<Self> {
        let container = layout.container.clone().ok_or(CoreError::MissingContainer)?;
        if layout.fields.is_empty() {
            return Err(CoreError::MissingAffordance("intent modal form"));
        }
        let modal = Modal::new(&layout.modal, layout.fields.clone())?;
        let new_record = require(layout.new_record.as_ref(), "new intent card button")?.clone();

        Ok(Self {
            records: HashMap::new(),
            list: CardList::new(container.title, container.anchor),
            modal,
            link: RegistryLink::new(clock, refresh),
            card_template: layout.card.clone(),
            new_record,
        })
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn list(&self) -> &CardList {
        &self.list
    }

    /// “新建”入口
    pub fn new_record_affordance(&self) -> &Affordance {
        &self.new_record
    }

    pub fn card_template(&self) -> &CardTemplate {
        &self.card_template
    }

    /// 记录构造上下文（用于 `Intent::builder().registry(..)`）
    pub fn link_mut(&mut self) -> &mut RegistryLink {
        &mut self.link
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: IntentId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn get(&self, id: IntentId) -> Option<&Intent> {
        self.records.get(&id)
    }

    /// 按视觉顺序遍历记录
    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.list.ids().iter().filter_map(|id| self.records.get(id))
    }

    /// 按列表位置取记录（锚点位置返回 `None`）
    pub fn at(&self, index: usize) -> Option<&Intent> {
        self.list.ids().get(index).and_then(|id| self.records.get(id))
    }

    // ========== 增删 ==========

    /// 用本注册表的上下文构造记录并加入
    pub fn create(&mut self, body: IntentBody) -> CoreResult<IntentId> {
        let intent = Intent::builder(body)
            .registry(&mut self.link)
            .card(&self.card_template)
            .build()?;
        let id = intent.id();
        self.add(intent)?;
        Ok(id)
    }

    /// 加入一条记录，卡片插入到锚点之前
    ///
    /// 记录不是本注册表签发的，或 ID 已存在时失败。
    pub fn add(&mut self, intent: Intent) -> CoreResult<()> {
        let id = intent.id();
        if intent.registry_tag() != self.link.ids.tag() || self.records.contains_key(&id) {
            return Err(CoreError::InsertionFailed(id));
        }

        self.list.insert_before_anchor(id);
        self.records.insert(id, intent);
        log::info!("Intent {id} added ({} total)", self.records.len());
        Ok(())
    }

    /// 移除记录：卡片离开列表，映射删除，自刷新任务取消
    pub fn remove(&mut self, id: IntentId) -> Option<Intent> {
        let Some(mut intent) = self.records.remove(&id) else {
            log::warn!("Remove requested for unknown intent {id}");
            return None;
        };

        self.list.remove(id);
        intent.teardown_events();
        log::info!("Intent {id} removed ({} left)", self.records.len());
        Some(intent)
    }

    // ========== 弹窗流程 ==========

    /// “新建”入口：以创建模式打开空白弹窗
    pub fn open_create(&mut self) {
        self.modal.open(ModalMode::Create);
        self.modal.attach(SubmitTarget::Create);
    }

    /// 关闭弹窗（关闭图标 / 取消按钮）
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// 触发当前模式的提交按钮
    ///
    /// 按绑定的目标分发到创建流程或对应记录的编辑流程。
    /// 查看模式、不可提交或目标已不存在时返回 `None`。
    pub fn submit(&mut self) -> Option<Submission> {
        let action = self.modal.mode().action()?;
        let target = self.modal.submit_control()?.target()?;

        match (action, target) {
            (ModalAction::Create, SubmitTarget::Create) => self.submit_create(),
            (ModalAction::Edit, SubmitTarget::Edit(id)) => {
                let Some(intent) = self.records.get_mut(&id) else {
                    log::warn!("Edit submitted for removed intent {id}");
                    self.modal.close();
                    return None;
                };
                intent.submit_edit(&mut self.modal).then_some(Submission::Edited(id))
            }
            _ => None,
        }
    }

    /// 创建提交：解析快照、构造记录、加入并关闭弹窗
    fn submit_create(&mut self) -> Option<Submission> {
        let (_, data) = self.modal.take_submission(ModalAction::Create)?;
        let body = IntentBody::from_form(&data);

        match self.create(body) {
            Ok(id) => {
                self.modal.close();
                Some(Submission::Created(id))
            }
            Err(e) => {
                log::error!("Failed to create intent: {e}");
                None
            }
        }
    }

    // ========== 卡片操作 ==========

    /// 点击卡片标题
    pub fn view(&mut self, id: IntentId) -> bool {
        let Some(intent) = self.records.get(&id) else {
            return false;
        };
        intent.open_view(&mut self.modal);
        true
    }

    /// 点击卡片编辑图标
    pub fn edit(&mut self, id: IntentId) -> bool {
        let Some(intent) = self.records.get(&id) else {
            return false;
        };
        intent.open_edit(&mut self.modal);
        self.modal.mode() == ModalMode::Edit
    }

    /// 点击卡片删除图标
    pub fn request_delete(&mut self, id: IntentId) -> bool {
        let Some(intent) = self.records.get_mut(&id) else {
            return false;
        };
        intent.request_delete();
        true
    }

    /// 点击卡片上的取消删除
    pub fn cancel_delete(&mut self, id: IntentId) -> bool {
        let Some(intent) = self.records.get_mut(&id) else {
            return false;
        };
        intent.cancel_delete();
        true
    }

    /// 点击卡片上的确认删除，仅在待确认时移除；返回是否已移除
    pub fn confirm_delete(&mut self, id: IntentId) -> bool {
        let pending = self.records.get(&id).is_some_and(Intent::confirm_delete);
        pending && self.remove(id).is_some()
    }

    /// 一次刷新 tick；已移除的 ID 忽略
    pub fn refresh(&mut self, id: IntentId) -> bool {
        let Some(intent) = self.records.get_mut(&id) else {
            return false;
        };
        intent.refresh_card();
        true
    }
}
