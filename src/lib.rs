//! Termfolio 交互式作品集终端
//!
//! 以模拟终端形式呈现的个人作品集：用户输入命令（help、projects、
//! contact 等），得到关于站主的格式化静态内容。主要组成：
//! - 命令注册表与会话控制器（命令分发与历史回溯的核心交互模型）
//! - 启动引导序列
//! - 基于 ratatui 的终端界面

// 模块声明
pub mod boot; // 启动引导序列模块
pub mod commands; // 命令注册表与内容生产者模块
pub mod config; // 统一配置系统模块
pub mod effects; // 命令副作用模块
pub mod terminal; // 会话控制器核心模块
pub mod ui; // 终端界面模块
pub mod utils; // 工具和错误处理模块

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::commands::{content, CommandRegistry};
use crate::config::ConfigManager;
use crate::terminal::SessionController;
use crate::ui::App;
use crate::utils::error::AppResult;
use crate::utils::init_logging;

/// 应用程序主入口点
pub fn run() {
    // 初始化日志系统
    if let Err(e) = init_logging() {
        eprintln!("日志系统初始化失败: {}", e);
        std::process::exit(1);
    }

    info!("Termfolio 应用程序启动");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("异步运行时初始化失败: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_app()) {
        eprintln!("应用程序运行失败: {}", e);
        std::process::exit(1);
    }

    info!("Termfolio 退出");
}

/// 装配各组件并运行界面事件循环
async fn run_app() -> AppResult<()> {
    // 加载配置（缺失或损坏时回退默认值）
    let manager = ConfigManager::new()?;
    let config = manager.load_config().await?;
    info!("配置加载完成");

    // 访问计数即发即弃，不阻塞启动
    let counter = config.counter.clone();
    tokio::spawn(async move {
        effects::ping_view_counter(&counter).await;
    });

    // 装配命令注册表与会话控制器
    let (effect_sink, session_events) = effects::channel();
    let registry = CommandRegistry::new(config.clone(), effect_sink);
    let processing_delay = Duration::from_millis(config.terminal.processing_delay_ms);
    let controller = Arc::new(
        SessionController::new(registry, processing_delay).with_welcome(content::welcome()),
    );

    let app = App::new(controller, config);
    app.run(session_events).await
}
