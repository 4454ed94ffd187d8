/*!
 * 配置系统数据类型定义
 *
 * 定义配置系统中使用的所有数据结构。
 * 结构与 TOML 配置文件格式保持完全一致。
 */

use serde::{Deserialize, Serialize};

/// 主配置结构
///
/// 包含应用程序的所有配置项，结构与 TOML 配置文件格式保持一致。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// 配置版本
    pub version: String,

    /// 站主资料 (对应 TOML 中的 [owner])
    pub owner: OwnerConfig,

    /// 社交链接 (对应 TOML 中的 [social])
    pub social: SocialConfig,

    /// 终端行为配置 (对应 TOML 中的 [terminal])
    pub terminal: TerminalConfig,

    /// 简历下载配置 (对应 TOML 中的 [resume])
    pub resume: ResumeConfig,

    /// 访问计数配置 (对应 TOML 中的 [counter])
    pub counter: CounterConfig,
}

/// 站主资料 (对应 TOML 中的 [owner] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerConfig {
    /// 姓名
    pub name: String,

    /// 头衔
    pub title: String,

    /// 联系邮箱
    pub email: String,

    /// 联系电话
    pub phone: String,
}

/// 社交链接 (对应 TOML 中的 [social] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialConfig {
    /// GitHub 主页
    pub github: String,

    /// LinkedIn 主页
    pub linkedin: String,

    /// 链接聚合页
    pub biolink: String,
}

/// 终端行为配置 (对应 TOML 中的 [terminal] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TerminalConfig {
    /// 提示符文本
    pub prompt: String,

    /// 提交命令后的模拟处理延迟（毫秒）
    pub processing_delay_ms: u64,
}

/// 简历下载配置 (对应 TOML 中的 [resume] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeConfig {
    /// PDF 下载地址
    pub url: String,

    /// 落盘文件名
    pub file_name: String,
}

/// 访问计数配置 (对应 TOML 中的 [counter] 节)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CounterConfig {
    /// 是否启用访问计数
    pub enabled: bool,

    /// 计数像素地址
    pub url: String,
}

impl AppConfig {
    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), String> {
        if self.owner.name.trim().is_empty() {
            return Err("站主姓名不能为空".to_string());
        }

        if self.terminal.prompt.trim().is_empty() {
            return Err("提示符文本不能为空".to_string());
        }

        // 延迟只是装饰性节奏，过大的值会让终端看起来卡死
        if self.terminal.processing_delay_ms > 10_000 {
            return Err(format!(
                "处理延迟过大: {}ms (最大 10000ms)",
                self.terminal.processing_delay_ms
            ));
        }

        if self.counter.enabled && self.counter.url.trim().is_empty() {
            return Err("启用访问计数时必须配置计数像素地址".to_string());
        }

        Ok(())
    }
}
