/*!
 * TOML 配置管理器
 *
 * 负责从文件系统读取和保存 TOML 配置文件。
 * 文件不存在或解析失败时回退到内置默认配置，应用启动永远不会
 * 因为配置问题而失败。
 */

use crate::config::defaults::create_default_config;
use crate::config::paths::ConfigPaths;
use crate::config::types::AppConfig;
use crate::utils::error::AppResult;
use anyhow::Context;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

/// TOML 配置管理器
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new() -> AppResult<Self> {
        let paths = ConfigPaths::new()?;
        Ok(Self {
            config_path: paths.config_file(),
        })
    }

    /// 创建指定配置路径的配置管理器（主要用于测试）
    pub fn with_config_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// 从文件系统加载 TOML 配置
    ///
    /// 文件不存在时返回默认配置；解析或验证失败时记录警告并
    /// 回退到默认配置。
    pub async fn load_config(&self) -> AppResult<AppConfig> {
        debug!("开始加载TOML配置: {:?}", self.config_path);

        if !self.config_path.exists() {
            info!("配置文件不存在，使用默认配置");
            return Ok(create_default_config());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", self.config_path.display()))?;

        match self.parse_toml_content(&content) {
            Ok(config) => {
                info!("配置文件解析成功");
                Ok(config)
            }
            Err(e) => {
                warn!("配置文件解析失败: {}, 使用默认配置", e);
                Ok(create_default_config())
            }
        }
    }

    /// 解析 TOML 内容为配置结构，并验证其有效性
    pub fn parse_toml_content(&self, content: &str) -> AppResult<AppConfig> {
        let config = toml::from_str::<AppConfig>(content)
            .with_context(|| format!("TOML配置解析失败 (文件: {})", self.config_path.display()))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("配置验证失败: {}", e))?;

        Ok(config)
    }

    /// 将配置保存到文件系统
    pub async fn save_config(&self, config: &AppConfig) -> AppResult<()> {
        let content = toml::to_string_pretty(config).context("配置序列化失败")?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("无法创建配置目录: {}", parent.display()))?;
        }

        fs::write(&self.config_path, content)
            .await
            .with_context(|| format!("无法写入配置文件: {}", self.config_path.display()))?;

        info!("配置已保存: {:?}", self.config_path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
        let manager = ConfigManager::with_config_path(temp_dir.path().join("config.toml"));

        let config = manager.load_config().await.expect("加载配置失败");
        assert_eq!(config, create_default_config());
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
        let manager = ConfigManager::with_config_path(temp_dir.path().join("config.toml"));

        let mut config = create_default_config();
        config.terminal.processing_delay_ms = 250;
        config.owner.name = "Test Owner".to_string();

        manager.save_config(&config).await.expect("保存配置失败");
        let reloaded = manager.load_config().await.expect("重新加载配置失败");

        assert_eq!(reloaded, config);
    }

    #[tokio::test]
    async fn test_invalid_toml_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().expect("创建临时目录失败");
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not [ valid toml")
            .await
            .expect("写入损坏配置失败");

        let manager = ConfigManager::with_config_path(config_path);
        let config = manager.load_config().await.expect("加载配置失败");

        assert_eq!(config, create_default_config());
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let manager = ConfigManager::with_config_path(PathBuf::from("unused.toml"));
        let mut config = create_default_config();
        config.terminal.processing_delay_ms = 99_000;
        let content = toml::to_string_pretty(&config).expect("序列化失败");

        assert!(manager.parse_toml_content(&content).is_err());
    }
}
