/*!
 * 统一配置系统模块
 *
 * 基于 TOML 的配置系统，管理站主资料、终端行为、简历下载与
 * 访问计数等配置项。配置文件不存在时回退到内置默认值。
 */

pub mod defaults;
pub mod manager;
pub mod paths;
pub mod types;

pub use defaults::create_default_config;
pub use manager::ConfigManager;
pub use paths::ConfigPaths;
pub use types::*;

/// 配置目录名称
pub const CONFIG_DIR_NAME: &str = "config";

/// 日志目录名称
pub const LOGS_DIR_NAME: &str = "logs";

/// 配置文件名称
pub const CONFIG_FILE_NAME: &str = "config.toml";
