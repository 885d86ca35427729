//!
//! src/backend/mod.rs
//! Backend 层：界面之外的服务
//!
//! 记录只存在于内存中，由 `intent-manager-core` 的 `Registry` 管理；
//! Backend 层目前只负责本地配置文件的读写。
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
