/*!
 * 错误处理模块
 *
 * 基于 anyhow 的统一错误处理系统。核心会话操作是全函数，没有错误路径；
 * 这里的类型只服务于周边设施（配置读写、界面初始化、副作用执行）。
 */

use anyhow::{anyhow, Result as AnyhowResult};

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;

/// 创建简单的应用程序错误
pub fn app_error(msg: impl Into<String>) -> AppError {
    anyhow!(msg.into())
}

/// 创建带上下文的错误转换函数
///
/// 返回一个闭包，可以将任何实现了 Display + Debug + Send + Sync 的错误
/// 转换为带有指定上下文信息的 AppError。
pub fn app_error_with_context<T>(msg: &str) -> impl FnOnce(T) -> AppError + '_
where
    T: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    move |err| anyhow!("{}: {}", msg, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_message() {
        let err = app_error("配置加载失败");
        assert_eq!(err.to_string(), "配置加载失败");
    }

    #[test]
    fn test_app_error_with_context() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = app_error_with_context("无法读取配置文件")(io_err);
        assert!(err.to_string().contains("无法读取配置文件"));
        assert!(err.to_string().contains("missing"));
    }
}
