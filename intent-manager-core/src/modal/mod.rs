//! 弹窗：查看 / 创建 / 编辑记录的唯一共享对话框
//!
//! 状态机：
//!
//! ```text
//! Closed ──open(View)───▶ View   ──close()──▶ Closed
//! Closed ──open(Create)─▶ Create ──close()──▶ Closed
//! Closed ──open(Edit)───▶ Edit   ──close()──▶ Closed
//! ```
//!
//! Create 与 Edit 各自关联一个提交按钮（[`ModalAction`]）。`open` 时绑定该按钮，
//! 随后由发起方通过 [`Modal::attach`] 挂上本轮的提交目标；`close` 时解绑，
//! 因此每个 open/close 周期只有一个提交处理者。
//!
//! 任意字段变化后重新计算 `submittable`（全部字段非空），
//! 并同步到已绑定提交按钮的禁用状态。

mod form;

pub use form::{Field, FieldSource, FieldValue, Form, FormData};

use crate::error::CoreResult;
use crate::host::{require, Affordance, FieldSpec, ModalActions};
use crate::id::IntentId;

/// 弹窗模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    Closed,
    View,
    Create,
    Edit,
}

impl ModalMode {
    /// 该模式关联的提交按钮
    pub fn action(self) -> Option<ModalAction> {
        match self {
            Self::Create => Some(ModalAction::Create),
            Self::Edit => Some(ModalAction::Edit),
            Self::Closed | Self::View => None,
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// 提交按钮标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Create,
    Edit,
}

/// 提交目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTarget {
    /// 由注册表创建新记录
    Create,
    /// 由指定记录应用编辑
    Edit(IntentId),
}

/// 当前绑定的提交按钮
#[derive(Debug, Clone)]
pub struct SubmitControl {
    action: ModalAction,
    affordance: Affordance,
    disabled: bool,
    target: Option<SubmitTarget>,
}

impl SubmitControl {
    pub fn action(&self) -> ModalAction {
        self.action
    }

    pub fn affordance(&self) -> &Affordance {
        &self.affordance
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn target(&self) -> Option<SubmitTarget> {
        self.target
    }
}

/// 弹窗固定的操作入口
#[derive(Debug, Clone)]
pub struct ModalControls {
    pub create: Affordance,
    pub edit: Affordance,
    pub cancel: Affordance,
    pub close: Affordance,
}

impl ModalControls {
    fn submit_for(&self, action: ModalAction) -> &Affordance {
        match action {
            ModalAction::Create => &self.create,
            ModalAction::Edit => &self.edit,
        }
    }
}

/// 弹窗
#[derive(Debug, Clone)]
pub struct Modal {
    mode: ModalMode,
    submittable: bool,
    form: Form,
    controls: ModalControls,
    submit: Option<SubmitControl>,
    /// 当前焦点字段索引
    focus: usize,
}

impl Modal {
    /// 定位弹窗的操作入口并创建弹窗，缺少任一入口即失败
    pub fn new(actions: &ModalActions, fields: Vec<FieldSpec>) -> CoreResult<Self> {
        let controls = ModalControls {
            create: require(actions.create.as_ref(), "create button")?.clone(),
            edit: require(actions.edit.as_ref(), "edit button")?.clone(),
            cancel: require(actions.cancel.as_ref(), "cancel button")?.clone(),
            close: require(actions.close.as_ref(), "close icon")?.clone(),
        };

        Ok(Self {
            mode: ModalMode::Closed,
            submittable: false,
            form: Form::new(fields),
            controls,
            submit: None,
            focus: 0,
        })
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_open()
    }

    pub fn is_submittable(&self) -> bool {
        self.submittable
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn controls(&self) -> &ModalControls {
        &self.controls
    }

    /// 当前绑定的提交按钮
    pub fn submit_control(&self) -> Option<&SubmitControl> {
        self.submit.as_ref()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// 以指定模式打开弹窗
    ///
    /// 只应在弹窗关闭时调用；重复打开会丢弃上一轮的绑定。
    pub fn open(&mut self, mode: ModalMode) {
        if !mode.is_open() {
            self.close();
            return;
        }

        if self.mode.is_open() {
            log::warn!("Modal opened as {mode:?} while already open as {:?}", self.mode);
            self.submit = None;
        }

        self.submit = mode.action().map(|action| SubmitControl {
            action,
            affordance: self.controls.submit_for(action).clone(),
            disabled: !self.submittable,
            target: None,
        });

        self.mode = mode;
        self.focus = 0;
        log::debug!("Modal opened: {mode:?}");
    }

    /// 为已绑定的提交按钮挂上提交目标
    ///
    /// 当前模式没有提交按钮时返回 `false`。
    pub fn attach(&mut self, target: SubmitTarget) -> bool {
        match self.submit.as_mut() {
            Some(control) => {
                control.target = Some(target);
                true
            }
            None => false,
        }
    }

    /// 关闭弹窗
    ///
    /// 解绑提交按钮（连同挂上的目标）、清空字段、取消只读、重置 `submittable`。
    /// 已关闭时调用也安全。
    pub fn close(&mut self) {
        if self.mode.is_open() {
            log::debug!("Modal closed from {:?}", self.mode);
        }

        self.submit = None;
        self.form.reset();
        self.form.set_read_only(false);
        self.submittable = false;
        self.focus = 0;
        self.mode = ModalMode::Closed;
    }

    /// 当前字段快照
    pub fn data(&self) -> FormData {
        self.form.data()
    }

    /// 按字段名填充表单
    pub fn fill(&mut self, data: &impl FieldSource) {
        self.form.fill(data);
        self.recompute();
    }

    /// 全部字段只读（查看模式）
    pub fn disable(&mut self) {
        self.form.set_read_only(true);
    }

    /// 取消全部字段只读
    pub fn enable(&mut self) {
        self.form.set_read_only(false);
    }

    /// 处理某个提交按钮的触发
    ///
    /// 触发的按钮必须是当前绑定的按钮，已挂上目标，且表单可提交；
    /// 满足时返回目标与字段快照。弹窗不会因此关闭，由处理者负责关闭。
    pub fn take_submission(&self, triggered: ModalAction) -> Option<(SubmitTarget, FormData)> {
        let control = self.submit.as_ref()?;
        if control.action != triggered || !self.submittable {
            return None;
        }
        let target = control.target?;
        Some((target, self.data()))
    }

    // ========== 字段编辑 ==========

    /// 下一个字段
    pub fn next_field(&mut self) {
        if !self.form.is_empty() {
            self.focus = (self.focus + 1) % self.form.len();
        }
    }

    /// 上一个字段
    pub fn prev_field(&mut self) {
        if !self.form.is_empty() {
            self.focus = self.focus.checked_sub(1).unwrap_or(self.form.len() - 1);
        }
    }

    /// 在焦点字段末尾输入字符
    pub fn input(&mut self, ch: char) {
        self.edit_focused(|value, _| value.push(ch));
    }

    /// 在焦点字段中换行（仅多行字段）
    pub fn newline(&mut self) {
        self.edit_focused(|value, multiline| {
            if multiline {
                value.push('\n');
            }
        });
    }

    /// 删除焦点字段的最后一个字符
    pub fn backspace(&mut self) {
        self.edit_focused(|value, _| {
            value.pop();
        });
    }

    /// 直接设置某个字段的值
    pub fn set_field(&mut self, name: &str, value: &str) {
        let Some(field) = self.form.field_mut(name) else {
            return;
        };
        if let Some(current) = field.value_mut() {
            *current = value.to_string();
            self.recompute();
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String, bool)) {
        if !self.mode.is_open() {
            return;
        }
        let Some(field) = self.form.field_at_mut(self.focus) else {
            return;
        };
        let multiline = field.is_multiline();
        if let Some(value) = field.value_mut() {
            edit(value, multiline);
            self.recompute();
        }
    }

    /// 重新计算可提交状态，并同步到提交按钮
    fn recompute(&mut self) {
        let submittable = self.form.all_filled();
        if let Some(control) = self.submit.as_mut() {
            control.disabled = !submittable;
        }
        self.submittable = submittable;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::host::HostLayout;

    fn actions() -> ModalActions {
        ModalActions {
            create: Some(Affordance::new("Ctrl+S")),
            edit: Some(Affordance::new("Ctrl+S")),
            cancel: Some(Affordance::new("Esc")),
            close: Some(Affordance::new("Ctrl+W")),
        }
    }

    fn modal() -> Modal {
        Modal::new(&actions(), HostLayout::intent_fields()).unwrap()
    }

    fn type_text(modal: &mut Modal, text: &str) {
        for ch in text.chars() {
            modal.input(ch);
        }
    }

    #[test]
    fn test_missing_controls_fail_construction() {
        let mut missing = actions();
        missing.cancel = None;
        assert_eq!(
            Modal::new(&missing, HostLayout::intent_fields()).unwrap_err(),
            CoreError::MissingAffordance("cancel button")
        );

        let mut missing = actions();
        missing.close = None;
        assert_eq!(
            Modal::new(&missing, HostLayout::intent_fields()).unwrap_err(),
            CoreError::MissingAffordance("close icon")
        );
    }

    #[test]
    fn test_open_binds_submit_control_per_mode() {
        let mut modal = modal();
        assert_eq!(modal.mode(), ModalMode::Closed);

        modal.open(ModalMode::Create);
        assert_eq!(modal.mode(), ModalMode::Create);
        assert_eq!(modal.submit_control().unwrap().action(), ModalAction::Create);
        assert!(modal.submit_control().unwrap().is_disabled());

        modal.close();
        modal.open(ModalMode::View);
        assert!(modal.submit_control().is_none());
        assert!(!modal.attach(SubmitTarget::Create));
    }

    #[test]
    fn test_submittable_tracks_every_field() {
        let mut modal = modal();
        modal.open(ModalMode::Create);
        assert!(!modal.is_submittable());

        type_text(&mut modal, "Greeting");
        modal.next_field();
        type_text(&mut modal, "hi");
        assert!(!modal.is_submittable());

        modal.next_field();
        type_text(&mut modal, "Hello!");
        assert!(modal.is_submittable());
        assert!(!modal.submit_control().unwrap().is_disabled());

        // 清空任意一个字段后恢复为不可提交
        modal.set_field("expressions", "");
        assert!(!modal.is_submittable());
        assert!(modal.submit_control().unwrap().is_disabled());
    }

    #[test]
    fn test_close_resets_state_and_is_idempotent() {
        let mut modal = modal();
        modal.open(ModalMode::Edit);
        modal.fill(&FormData::from([
            ("title".to_string(), "t".to_string()),
            ("expressions".to_string(), "e".to_string()),
            ("answer".to_string(), "a".to_string()),
        ]));
        modal.disable();
        assert!(modal.is_submittable());

        modal.close();
        assert_eq!(modal.mode(), ModalMode::Closed);
        assert!(modal.submit_control().is_none());
        assert!(!modal.is_submittable());
        assert!(modal.data().values().all(String::is_empty));
        assert!(modal.form().fields().iter().all(|f| !f.is_read_only()));

        modal.close();
        assert_eq!(modal.mode(), ModalMode::Closed);
        assert!(!modal.is_submittable());
        assert!(modal.data().values().all(String::is_empty));
    }

    #[test]
    fn test_take_submission_requires_matching_action_and_target() {
        let mut modal = modal();
        modal.open(ModalMode::Create);
        modal.set_field("title", "t");
        modal.set_field("expressions", "e");
        modal.set_field("answer", "a");

        // 尚未挂上目标
        assert!(modal.take_submission(ModalAction::Create).is_none());

        assert!(modal.attach(SubmitTarget::Create));
        assert!(modal.take_submission(ModalAction::Edit).is_none());

        let (target, data) = modal.take_submission(ModalAction::Create).unwrap();
        assert_eq!(target, SubmitTarget::Create);
        assert_eq!(data["title"], "t");
    }

    #[test]
    fn test_take_submission_blocked_when_not_submittable() {
        let mut modal = modal();
        modal.open(ModalMode::Create);
        modal.attach(SubmitTarget::Create);
        modal.set_field("title", "t");
        assert!(modal.take_submission(ModalAction::Create).is_none());
    }

    #[test]
    fn test_disabled_fields_ignore_input() {
        let mut modal = modal();
        modal.open(ModalMode::View);
        modal.fill(&FormData::from([("title".to_string(), "t".to_string())]));
        modal.disable();

        modal.input('x');
        modal.backspace();
        modal.set_field("title", "changed");
        assert_eq!(modal.data()["title"], "t");
    }

    #[test]
    fn test_newline_only_in_multiline_field() {
        let mut modal = modal();
        modal.open(ModalMode::Create);

        modal.newline();
        assert_eq!(modal.data()["title"], "");

        modal.next_field();
        type_text(&mut modal, "hi");
        modal.newline();
        type_text(&mut modal, "hello");
        assert_eq!(modal.data()["expressions"], "hi\nhello");
    }

    #[test]
    fn test_input_ignored_when_closed() {
        let mut modal = modal();
        modal.input('x');
        assert_eq!(modal.data()["title"], "");
    }

    #[test]
    fn test_field_focus_wraps() {
        let mut modal = modal();
        modal.open(ModalMode::Create);
        modal.prev_field();
        assert_eq!(modal.focus(), 2);
        modal.next_field();
        assert_eq!(modal.focus(), 0);
    }

    #[test]
    fn test_reentrant_open_drops_stale_binding() {
        let mut modal = modal();
        modal.open(ModalMode::Create);
        modal.attach(SubmitTarget::Create);

        modal.open(ModalMode::Edit);
        let control = modal.submit_control().unwrap();
        assert_eq!(control.action(), ModalAction::Edit);
        assert!(control.target().is_none());
    }
}
