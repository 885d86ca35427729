//! 记录 ID 与分配器

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 记录 ID，构造后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IntentId(u64);

impl IntentId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<IntentId> for u64 {
    fn from(id: IntentId) -> Self {
        id.0
    }
}

/// 单调递增的 ID 分配器，从 0 开始，删除后也不复用
///
/// 每个分配器带有一个标签，注册表据此拒绝其他注册表签发的记录。
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
    tag: Uuid,
}

impl IdAllocator {
    pub fn new(tag: Uuid) -> Self {
        Self { next: 0, tag }
    }

    /// 分配下一个 ID
    pub fn allocate(&mut self) -> IntentId {
        let id = IntentId(self.next);
        self.next += 1;
        id
    }

    /// 已经分配过的 ID 数量
    pub fn issued(&self) -> u64 {
        self.next
    }

    pub fn tag(&self) -> Uuid {
        self.tag
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut ids = IdAllocator::new(Uuid::nil());
        let issued: Vec<u64> = (0..5).map(|_| ids.allocate().get()).collect();
        assert_eq!(issued, [0, 1, 2, 3, 4]);
        assert_eq!(ids.issued(), 5);
    }

    #[test]
    fn test_display() {
        let mut ids = IdAllocator::new(Uuid::nil());
        ids.allocate();
        assert_eq!(ids.allocate().to_string(), "#1");
    }

    #[test]
    fn test_serializes_as_number() {
        let mut ids = IdAllocator::new(Uuid::nil());
        let id = ids.allocate();
        assert_eq!(serde_json::to_string(&id).unwrap(), "0");
    }
}
