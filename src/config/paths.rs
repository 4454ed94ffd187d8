/*!
 * 配置系统路径管理模块
 *
 * 提供统一的配置文件路径管理，支持跨平台路径解析和目录创建。
 */

use crate::utils::error::AppResult;
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};

/// 配置路径管理器
///
/// 负责管理所有配置相关的文件和目录路径，提供跨平台的路径解析功能。
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// 应用程序数据目录
    app_data_dir: PathBuf,

    /// 配置目录
    config_dir: PathBuf,

    /// 日志目录
    logs_dir: PathBuf,
}

impl ConfigPaths {
    /// 创建新的配置路径管理器
    ///
    /// 根据当前平台自动确定配置目录位置。
    ///
    /// # 错误
    ///
    /// 如果无法确定用户目录或创建必要的目录，将返回错误。
    pub fn new() -> AppResult<Self> {
        let app_data_dir = Self::get_app_data_dir()?;
        Self::with_app_data_dir(app_data_dir)
    }

    /// 使用自定义应用数据目录创建配置路径管理器
    ///
    /// # 错误
    ///
    /// 如果无法创建必要的目录，将返回错误。
    pub fn with_app_data_dir<P: AsRef<Path>>(app_data_dir: P) -> AppResult<Self> {
        let app_data_dir = app_data_dir.as_ref().to_path_buf();

        let config_dir = app_data_dir.join(crate::config::CONFIG_DIR_NAME);
        let logs_dir = app_data_dir.join(crate::config::LOGS_DIR_NAME);

        let paths = Self {
            app_data_dir,
            config_dir,
            logs_dir,
        };

        // 确保所有必要的目录存在
        paths.ensure_directories_exist()?;

        Ok(paths)
    }

    /// 获取平台对应的应用数据目录
    fn get_app_data_dir() -> AppResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| anyhow!("无法确定用户配置目录"))?;
        Ok(base.join("termfolio"))
    }

    /// 确保所有必要的目录存在
    fn ensure_directories_exist(&self) -> AppResult<()> {
        for dir in [&self.app_data_dir, &self.config_dir, &self.logs_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("无法创建目录: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// 应用程序数据目录
    pub fn app_data_dir(&self) -> &Path {
        &self.app_data_dir
    }

    /// 配置目录
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// 日志目录
    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// 配置文件完整路径
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(crate::config::CONFIG_FILE_NAME)
    }
}
