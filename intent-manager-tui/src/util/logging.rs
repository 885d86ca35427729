//! 日志初始化
//!
//! 标准输出属于终端界面，日志写入数据目录下的文件。
//! 级别优先取环境变量 `INTENT_MANAGER_LOG`，其次取配置文件中的 `log_level`。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// 日志级别环境变量
pub const LOG_ENV: &str = "INTENT_MANAGER_LOG";

/// 日志文件路径
pub fn log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intent-manager")
        .join("intent-manager.log")
}

/// 安装文件日志
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let path = log_file();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::new().filter_or(LOG_ENV, default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already installed")?;

    Ok(path)
}
