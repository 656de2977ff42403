//! 配置管理模块

mod persistence;

pub use persistence::*;

use crate::overlay::OverlayConfig;
use serde::{Deserialize, Serialize};

/// 应用设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// 主题名称
    pub theme: String,
    /// 是否显示行号栏
    pub line_numbers: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_string(),
            line_numbers: true,
        }
    }
}

/// 应用配置（持久化到 config.json）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 提示层参数
    #[serde(default = "OverlayConfig::terminal")]
    pub overlay: OverlayConfig,
    /// 应用设置
    #[serde(default)]
    pub settings: AppSettings,
    /// 启动时重新打开的文档路径
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayConfig::terminal(),
            settings: AppSettings::default(),
            documents: Vec::new(),
        }
    }
}

impl AppConfig {
    /// 创建新的空配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录打开的文档（避免重复）
    pub fn add_document(&mut self, path: &str) {
        if !self.documents.iter().any(|p| p == path) {
            self.documents.push(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"settings": {"line_numbers": false}}"#)
            .unwrap();
        assert_eq!(config.overlay, OverlayConfig::terminal());
        assert_eq!(config.settings.theme, "catppuccin-mocha");
        assert!(!config.settings.line_numbers);
        assert!(config.documents.is_empty());
    }

    #[test]
    fn test_add_document_dedups() {
        let mut config = AppConfig::new();
        config.add_document("a.txt");
        config.add_document("a.txt");
        config.add_document("b.txt");
        assert_eq!(config.documents, vec!["a.txt", "b.txt"]);
    }
}
