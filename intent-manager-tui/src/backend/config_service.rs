//! 配置服务
//!
//! 配置以 JSON 保存在 `<config_dir>/intent-manager/config.json`。
//! 文件不存在时使用默认配置；记录本身从不持久化。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 语言代码（BCP 47）
    pub language: String,
    /// 默认日志级别，可被 `INTENT_MANAGER_LOG` 覆盖
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intent-manager")
        .join("config.json")
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("malformed config {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write config {}", self.path.display()))?;

        Ok(())
    }
}
