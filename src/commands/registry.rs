/*!
 * 命令注册表
 *
 * 命令名到命令变体的固定映射。注册表在启动时构建一次，之后只读。
 * 查找只做精确匹配，不做模糊匹配，也没有别名；大小写归一和
 * 去空白由调用方完成。
 *
 * 命令集合用枚举表达而不是字符串键的函数表，命令分发经过一个
 * 穷尽匹配的函数，新增命令时编译器会指出所有需要补齐的位置。
 */

use serde::{Deserialize, Serialize};

use crate::commands::content;
use crate::config::AppConfig;
use crate::effects::{EffectSink, SessionEvent};
use crate::terminal::types::RenderableContent;

/// 作品集命令变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortfolioCommand {
    Help,
    About,
    Skills,
    Projects,
    Education,
    Experience,
    Contact,
    Social,
    Resume,
    Clear,
    Exit,
}

impl PortfolioCommand {
    /// 全部已注册命令，按 help 输出顺序排列
    pub const ALL: [PortfolioCommand; 11] = [
        PortfolioCommand::Help,
        PortfolioCommand::About,
        PortfolioCommand::Skills,
        PortfolioCommand::Projects,
        PortfolioCommand::Education,
        PortfolioCommand::Experience,
        PortfolioCommand::Contact,
        PortfolioCommand::Social,
        PortfolioCommand::Clear,
        PortfolioCommand::Resume,
        PortfolioCommand::Exit,
    ];

    /// 命令的注册名（归一化后的查找键）
    pub fn name(&self) -> &'static str {
        match self {
            PortfolioCommand::Help => "help",
            // about 的入口是 sudo，彩蛋
            PortfolioCommand::About => "sudo",
            PortfolioCommand::Skills => "skills",
            PortfolioCommand::Projects => "projects",
            PortfolioCommand::Education => "education",
            PortfolioCommand::Experience => "experience",
            PortfolioCommand::Contact => "contact",
            PortfolioCommand::Social => "social",
            PortfolioCommand::Resume => "resume",
            PortfolioCommand::Clear => "clear",
            PortfolioCommand::Exit => "exit",
        }
    }

    /// help 输出中使用的一行说明
    pub fn description(&self) -> &'static str {
        match self {
            PortfolioCommand::Help => "Show this help message",
            PortfolioCommand::About => "about me",
            PortfolioCommand::Skills => "View my technical skills",
            PortfolioCommand::Projects => "See my projects",
            PortfolioCommand::Education => "My educational background",
            PortfolioCommand::Experience => "Work experience",
            PortfolioCommand::Contact => "Get in touch",
            PortfolioCommand::Social => "Social media links",
            PortfolioCommand::Resume => "Download my resume",
            PortfolioCommand::Clear => "Clear the terminal",
            PortfolioCommand::Exit => "End the session",
        }
    }
}

/// 命令注册表
///
/// 持有构建内容所需的配置和副作用发送端。构造后只读。
pub struct CommandRegistry {
    config: AppConfig,
    effects: EffectSink,
}

impl CommandRegistry {
    /// 创建新的命令注册表
    pub fn new(config: AppConfig, effects: EffectSink) -> Self {
        Self { config, effects }
    }

    /// 解析归一化后的命令名
    ///
    /// 未命中返回 None。注册表自身不产生任何错误，"未找到"由
    /// 调用方渲染为普通输出。
    pub fn resolve(&self, name: &str) -> Option<PortfolioCommand> {
        PortfolioCommand::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// 调用命令对应的生产者
    ///
    /// 返回展示内容；带副作用的命令在这里向通道投递事件，
    /// 事件的执行结果不影响返回值。
    pub fn produce(&self, command: PortfolioCommand) -> RenderableContent {
        match command {
            PortfolioCommand::Help => content::help(),
            PortfolioCommand::About => content::about(&self.config.owner),
            PortfolioCommand::Skills => content::skills(),
            PortfolioCommand::Projects => content::projects(),
            PortfolioCommand::Education => content::education(),
            PortfolioCommand::Experience => content::experience(),
            PortfolioCommand::Contact => content::contact(&self.config.owner),
            PortfolioCommand::Social => content::social(&self.config.social),
            PortfolioCommand::Resume => {
                self.effects.dispatch(SessionEvent::DownloadResume);
                content::resume_notice()
            }
            // clear 的生产者返回"无输出"哨兵；实际清空由会话控制器完成
            PortfolioCommand::Clear => RenderableContent::empty(),
            PortfolioCommand::Exit => {
                self.effects.dispatch(SessionEvent::EndSession);
                content::exit_notice()
            }
        }
    }

    /// 当前配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
