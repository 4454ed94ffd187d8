/*!
 * 命令副作用模块
 *
 * 简历下载、会话终止、访问计数等"即发即弃"的副作用。
 * 命令生产者只向 SessionEvent 通道投递事件，具体执行由应用层完成；
 * 副作用的成败不属于命令解析的成功/失败契约。
 */

pub mod error;

pub use error::{EffectError, EffectResult};

use crate::config::{CounterConfig, ResumeConfig};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// 会话副作用事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// 触发简历下载
    DownloadResume,
    /// 请求结束会话
    EndSession,
}

/// 副作用发送端
///
/// 可克隆的轻量句柄。投递是即发即弃的：接收端已关闭时事件被
/// 静默丢弃，不影响命令输出。
#[derive(Debug, Clone)]
pub struct EffectSink {
    sender: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl EffectSink {
    /// 创建空实现（测试与无界面场景）
    pub fn disabled() -> Self {
        Self { sender: None }
    }

    /// 投递一个副作用事件
    pub fn dispatch(&self, event: SessionEvent) {
        if let Some(sender) = &self.sender {
            if sender.send(event).is_err() {
                debug!("副作用事件投递失败，接收端已关闭: {:?}", event);
            }
        }
    }
}

/// 创建副作用通道
pub fn channel() -> (EffectSink, mpsc::UnboundedReceiver<SessionEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (
        EffectSink {
            sender: Some(sender),
        },
        receiver,
    )
}

/// 共享 HTTP 客户端
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// 下载简历到平台下载目录
///
/// 返回落盘后的完整路径。
pub async fn download_resume(resume: &ResumeConfig) -> EffectResult<PathBuf> {
    let download_dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(EffectError::DownloadDirUnavailable)?;

    info!("开始下载简历: {}", resume.url);

    let response = HTTP_CLIENT
        .get(&resume.url)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;

    let target = download_dir.join(&resume.file_name);
    tokio::fs::write(&target, &bytes)
        .await
        .map_err(|e| EffectError::io(format!("写入简历文件 {}", target.display()), e))?;

    info!("简历已保存: {}", target.display());
    Ok(target)
}

/// 访问计数像素请求
///
/// 纯装饰性统计，失败只记录 debug 日志。
pub async fn ping_view_counter(counter: &CounterConfig) {
    if !counter.enabled || counter.url.trim().is_empty() {
        return;
    }

    match HTTP_CLIENT.get(&counter.url).send().await {
        Ok(response) => {
            debug!("访问计数请求完成: {}", response.status());
        }
        Err(e) => {
            debug!("访问计数请求失败: {}", e);
        }
    }
}

/// 在后台执行简历下载，结果只记录日志
pub fn spawn_resume_download(resume: ResumeConfig) {
    tokio::spawn(async move {
        match download_resume(&resume).await {
            Ok(path) => info!("简历下载完成: {}", path.display()),
            Err(e) => warn!("简历下载失败: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_delivers_events() {
        let (sink, mut receiver) = channel();

        sink.dispatch(SessionEvent::DownloadResume);
        sink.dispatch(SessionEvent::EndSession);

        assert_eq!(receiver.recv().await, Some(SessionEvent::DownloadResume));
        assert_eq!(receiver.recv().await, Some(SessionEvent::EndSession));
    }

    #[tokio::test]
    async fn test_dispatch_after_receiver_dropped_is_silent() {
        let (sink, receiver) = channel();
        drop(receiver);

        // 接收端关闭后投递不应 panic
        sink.dispatch(SessionEvent::EndSession);
    }

    #[test]
    fn test_disabled_sink_is_noop() {
        let sink = EffectSink::disabled();
        sink.dispatch(SessionEvent::DownloadResume);
    }

    #[tokio::test]
    async fn test_view_counter_disabled_is_noop() {
        // 未启用时不应发出任何请求（也就不会因无效地址失败）
        let counter = CounterConfig {
            enabled: false,
            url: "http://invalid.invalid/pixel".to_string(),
        };
        ping_view_counter(&counter).await;
    }
}
