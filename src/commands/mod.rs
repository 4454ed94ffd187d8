// 命令注册表与内容生产者模块

pub mod content;
pub mod registry;

pub use registry::{CommandRegistry, PortfolioCommand};
