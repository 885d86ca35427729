//! 弹窗表单：按名称索引的字段集合

use std::collections::BTreeMap;

use crate::host::FieldSpec;
use crate::text::lines_to_string;

/// 表单快照：字段名 → 当前原始字符串值
pub type FormData = BTreeMap<String, String>;

/// 写入表单的字段值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// 普通字符串
    Text(&'a str),
    /// 有序字符串序列，写入时以 `\n` 连接
    Lines(&'a [String]),
}

/// 可按字段名提供值的数据源
///
/// [`Form::fill`] 只写入数据源中存在对应键的字段。
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl FieldSource for FormData {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(|value| FieldValue::Text(value.as_str()))
    }
}

/// 单个表单字段
#[derive(Debug, Clone)]
pub struct Field {
    spec: FieldSpec,
    value: String,
    read_only: bool,
}

impl Field {
    fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            read_only: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_multiline(&self) -> bool {
        self.spec.multiline
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut String> {
        (!self.read_only).then_some(&mut self.value)
    }
}

/// 表单
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Self {
            fields: specs.into_iter().map(Field::new).collect(),
        }
    }

    /// 全部字段（表单顺序）
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub(crate) fn field_at_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    pub(crate) fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// 调用时刻的字段快照
    pub fn data(&self) -> FormData {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value.clone()))
            .collect()
    }

    /// 按字段名写入数据，不在数据源中的字段保持不变
    pub fn fill(&mut self, data: &impl FieldSource) {
        for field in &mut self.fields {
            match data.field_value(field.name()) {
                Some(FieldValue::Text(text)) => field.value = text.to_string(),
                Some(FieldValue::Lines(lines)) => field.value = lines_to_string(lines),
                None => {}
            }
        }
    }

    /// 设置全部字段的只读状态
    pub fn set_read_only(&mut self, read_only: bool) {
        for field in &mut self.fields {
            field.read_only = read_only;
        }
    }

    /// 清空全部字段
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// 每个字段都非空
    pub fn all_filled(&self) -> bool {
        self.fields.iter().all(|f| !f.value.is_empty())
    }
}
