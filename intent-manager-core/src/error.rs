//! Unified error type definition

use thiserror::Error;

use crate::id::IntentId;

/// Core layer error type
///
/// 所有变体都是结构性错误：宿主布局缺少必需的操作入口，或 API 被误用。
/// 没有可重试的错误类别。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Required host affordance missing at construction
    #[error("Missing {0}.")]
    MissingAffordance(&'static str),

    /// Root container for the card list missing
    #[error("Missing intent list container.")]
    MissingContainer,

    /// Intent built without its owning registry
    #[error("Missing intent system.")]
    MissingRegistry,

    /// Intent rejected by the registry (foreign or duplicate ID)
    #[error("Insertion failed: {0}")]
    InsertionFailed(IntentId),
}

impl CoreError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// Every current variant signals a malformed host or API misuse.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingAffordance(_)
            | Self::MissingContainer
            | Self::MissingRegistry
            | Self::InsertionFailed(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
