//! Intent Manager Core Library
//!
//! Provides the interaction and state logic of the intent manager, including:
//! - A shared modal dialog (view / create / edit) with field validation
//! - Intent records with their cards, two-step deletion and self-refreshing age labels
//! - A registry that owns every record and coordinates the modal and the card list
//!
//! This library renders nothing. The user interface describes itself through
//! [`HostLayout`] and drives the registry with high-level operations.

pub mod clock;
pub mod error;
pub mod host;
pub mod id;
pub mod intent;
pub mod modal;
pub mod refresh;
pub mod registry;
pub mod text;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use error::{CoreError, CoreResult};
pub use host::{Affordance, CardTemplate, Container, FieldSpec, HostLayout, ModalActions};
pub use id::IntentId;
pub use intent::{DeletionState, Intent, IntentBody};
pub use modal::{Modal, ModalAction, ModalMode, SubmitTarget};
pub use refresh::{refresh_channel, RefreshReceiver, RefreshSender, REFRESH_PERIOD};
pub use registry::{CardList, Registry, RegistryLink, Submission};
