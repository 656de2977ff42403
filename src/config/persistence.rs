//! 配置持久化模块
//! 配置目录 ~/.fadenote/ 下的 config.json 与日志文件

use super::AppConfig;
use anyhow::Context;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 配置文件夹名称（位于用户主目录下）
pub const CONFIG_DIR_NAME: &str = ".fadenote";

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 日志文件名（设置 RUST_LOG 时启用）
pub const LOG_FILE_NAME: &str = "fadenote.log";

/// 读取配置；文件不存在时返回默认配置，内容损坏时返回错误
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// 写入配置
///
/// 先写临时文件再重命名，退出时被中断也不会留下半个文件。
pub fn save_config(config: &AppConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(config)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content).with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    log::debug!("config saved to {}", path.display());
    Ok(())
}

/// 配置目录 ~/.fadenote/，没有主目录时使用当前目录
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// ~/.fadenote/config.json
pub fn get_config_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE_NAME)
}

/// 确保配置目录存在
pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = get_config_dir();
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating {}", config_dir.display()))?;
    Ok(config_dir)
}

/// 创建（截断）日志文件
pub fn open_log_file() -> anyhow::Result<File> {
    let path = ensure_config_dir()?.join(LOG_FILE_NAME);
    File::create(&path).with_context(|| format!("creating {}", path.display()))
}
