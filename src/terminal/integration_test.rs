//! 会话流程集成测试
//!
//! 覆盖命令提交、转录维护与历史回溯在真实注册表上的协作行为。

use std::sync::Arc;
use std::time::Duration;

use crate::commands::registry::CommandRegistry;
use crate::commands::{content, PortfolioCommand};
use crate::config::create_default_config;
use crate::effects::{self, EffectSink, SessionEvent};
use crate::terminal::session::SessionController;

fn controller_with_delay(delay: Duration) -> SessionController {
    let registry = CommandRegistry::new(create_default_config(), EffectSink::disabled());
    SessionController::new(registry, delay)
}

#[tokio::test]
async fn test_full_session_flow() {
    let controller = controller_with_delay(Duration::ZERO);

    // 浏览几个命令
    controller.submit("help").await;
    controller.submit("projects").await;
    controller.submit("nonsense").await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.transcript.len(), 3);
    assert!(snapshot.transcript[0].output.text().contains("Available Commands:"));
    assert!(snapshot.transcript[1].output.text().contains("Featured Projects"));
    assert!(snapshot.transcript[2].output.text().contains("Command not found: nonsense"));

    // 转录按时间顺序排列
    for pair in snapshot.transcript.windows(2) {
        assert!(pair[0].occurred_at <= pair[1].occurred_at);
    }

    // 清空后从头开始
    controller.submit("clear").await;
    assert_eq!(controller.transcript_len(), 0);

    controller.submit("contact").await;
    assert_eq!(controller.transcript_len(), 1);
}

#[tokio::test]
async fn test_every_registered_command_round_trips_through_submit() {
    let controller = controller_with_delay(Duration::ZERO);

    for command in PortfolioCommand::ALL {
        if command == PortfolioCommand::Clear {
            continue;
        }
        controller.submit(command.name()).await;
    }

    // clear 以外的每个命令恰好追加一条条目
    assert_eq!(controller.transcript_len(), PortfolioCommand::ALL.len() - 1);
}

#[tokio::test]
async fn test_overlapping_submissions_are_queued_in_order() {
    let controller = Arc::new(controller_with_delay(Duration::from_millis(40)));

    let first = Arc::clone(&controller);
    let first_handle = tokio::spawn(async move { first.submit("help").await });

    // 第一条还在延迟窗口内时提交第二条
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(controller.is_busy());

    let second = Arc::clone(&controller);
    let second_handle = tokio::spawn(async move { second.submit("sudo").await });

    first_handle.await.expect("第一条提交失败");
    second_handle.await.expect("第二条提交失败");

    // 排队串行处理，转录顺序与提交顺序一致
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.transcript.len(), 2);
    assert_eq!(snapshot.transcript[0].command_text, "help");
    assert_eq!(snapshot.transcript[1].command_text, "sudo");
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_exit_command_emits_end_session_event() {
    let (sink, mut receiver) = effects::channel();
    let registry = CommandRegistry::new(create_default_config(), sink);
    let controller = SessionController::new(registry, Duration::ZERO);

    controller.submit("exit").await;

    assert_eq!(receiver.recv().await, Some(SessionEvent::EndSession));
    let snapshot = controller.snapshot();
    assert!(snapshot.transcript[0].output.text().contains("Session ended."));
}

#[tokio::test]
async fn test_welcome_banner_seeds_transcript() {
    let registry = CommandRegistry::new(create_default_config(), EffectSink::disabled());
    let controller =
        SessionController::new(registry, Duration::ZERO).with_welcome(content::welcome());

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.transcript.len(), 1);
    assert_eq!(snapshot.transcript[0].command_text, "");
    assert!(snapshot.transcript[0]
        .output
        .text()
        .contains("Welcome to my Interactive Portfolio Terminal!"));
}
