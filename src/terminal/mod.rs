// 终端会话核心模块

pub mod session;
pub mod types;

#[cfg(test)]
pub mod integration_test;

pub use session::SessionController;
pub use types::*;
