/*!
 * 会话控制器
 *
 * 终端会话状态的唯一所有者：转录记录、待输入文本、历史回溯游标
 * 与忙碌标志。所有状态变更都经过这里的公开操作，展示层只读取
 * 快照。
 *
 * 提交处理经过一把异步锁串行化：并发提交会排队，转录顺序与
 * 拿锁顺序一致。处理过程中有一段纯装饰性的模拟延迟，期间
 * 忙碌标志对外可见。
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::debug;

use crate::commands::content;
use crate::commands::registry::CommandRegistry;
use crate::terminal::types::{RenderableContent, SessionSnapshot, TranscriptEntry};

/// 会话内部状态
///
/// 不变式：recall_cursor 要么为 None，要么是 recall_history 的
/// 合法下标；transcript 里永远不会出现 clear 命令的条目。
#[derive(Debug, Default)]
struct SessionState {
    /// 转录记录，只追加，插入顺序即展示顺序
    transcript: Vec<TranscriptEntry>,

    /// 输入框当前文本
    pending_input: String,

    /// 历史提交的原始文本
    recall_history: Vec<String>,

    /// 历史回溯游标，None 表示未在回溯
    recall_cursor: Option<usize>,
}

/// 会话控制器
pub struct SessionController {
    state: RwLock<SessionState>,
    registry: CommandRegistry,
    busy: AtomicBool,
    processing_delay: Duration,
    /// 串行化提交处理，保证转录顺序
    submit_lock: Mutex<()>,
}

impl SessionController {
    /// 创建新的会话控制器
    pub fn new(registry: CommandRegistry, processing_delay: Duration) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            registry,
            busy: AtomicBool::new(false),
            processing_delay,
            submit_lock: Mutex::new(()),
        }
    }

    /// 预置欢迎横幅作为首条转录条目（构建器风格）
    pub fn with_welcome(self, banner: RenderableContent) -> Self {
        self.state
            .write()
            .transcript
            .push(TranscriptEntry::new("", banner));
        self
    }

    /// 提交一条命令
    ///
    /// 空白输入是无操作。否则：原始文本进入回溯历史、游标复位，
    /// 然后在串行锁内经过模拟延迟完成解析，追加恰好一条转录条目。
    /// 例外是归一化后的 clear：立即清空整个转录且不追加条目，
    /// 也不参与延迟排队。
    pub async fn submit(&self, raw_text: &str) {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return;
        }

        {
            let mut state = self.state.write();
            state.recall_history.push(raw_text.to_string());
            state.recall_cursor = None;
        }

        let normalized = trimmed.to_lowercase();

        // clear 不经过注册表：直接清空转录
        if normalized == "clear" {
            self.state.write().transcript.clear();
            debug!("转录已清空");
            return;
        }

        let _guard = self.submit_lock.lock().await;
        self.busy.store(true, Ordering::SeqCst);

        // 模拟处理延迟，纯装饰性节奏
        tokio::time::sleep(self.processing_delay).await;

        let output = match self.registry.resolve(&normalized) {
            Some(command) => self.registry.produce(command),
            None => content::not_found(raw_text),
        };

        self.state
            .write()
            .transcript
            .push(TranscriptEntry::new(raw_text, output));
        self.busy.store(false, Ordering::SeqCst);
    }

    /// 回溯到上一条历史命令
    ///
    /// 历史为空时无操作。未在回溯时从最新一条开始；已在回溯时
    /// 向更早的方向移动，到最早一条后停住。
    pub fn recall_previous(&self) {
        let mut state = self.state.write();
        if state.recall_history.is_empty() {
            return;
        }

        let cursor = match state.recall_cursor {
            None => state.recall_history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };

        state.recall_cursor = Some(cursor);
        state.pending_input = state.recall_history[cursor].clone();
    }

    /// 回溯到下一条历史命令
    ///
    /// 未在回溯时无操作。越过最新一条后退出回溯状态并清空
    /// 输入框。
    pub fn recall_next(&self) {
        let mut state = self.state.write();
        let Some(cursor) = state.recall_cursor else {
            return;
        };

        let next = cursor + 1;
        if next >= state.recall_history.len() {
            state.recall_cursor = None;
            state.pending_input.clear();
        } else {
            state.recall_cursor = Some(next);
            state.pending_input = state.recall_history[next].clone();
        }
    }

    /// 直接设置输入框文本，不做任何校验
    pub fn set_pending_input(&self, text: impl Into<String>) {
        self.state.write().pending_input = text.into();
    }

    /// 当前输入框文本
    pub fn pending_input(&self) -> String {
        self.state.read().pending_input.clone()
    }

    /// 是否正在处理命令
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// 读取会话状态快照
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read();
        SessionSnapshot {
            transcript: state.transcript.clone(),
            pending_input: state.pending_input.clone(),
            busy: self.is_busy(),
        }
    }

    /// 转录条目数（测试辅助）
    pub fn transcript_len(&self) -> usize {
        self.state.read().transcript.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::create_default_config;
    use crate::effects::EffectSink;

    /// 创建零延迟的测试控制器
    fn controller() -> SessionController {
        let registry = CommandRegistry::new(create_default_config(), EffectSink::disabled());
        SessionController::new(registry, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_submit_appends_exactly_one_entry() {
        let controller = controller();

        controller.submit("help").await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.transcript.len(), 1);
        assert_eq!(snapshot.transcript[0].command_text, "help");
        assert!(!snapshot.transcript[0].output.is_empty());
    }

    #[tokio::test]
    async fn test_submit_blank_input_is_noop() {
        let controller = controller();

        controller.submit("").await;
        controller.submit("   ").await;

        assert_eq!(controller.transcript_len(), 0);
        // 空白输入也不进入回溯历史
        controller.recall_previous();
        assert_eq!(controller.pending_input(), "");
    }

    #[tokio::test]
    async fn test_command_names_are_case_insensitive() {
        let controller = controller();

        controller.submit("Help").await;
        controller.submit("help").await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.transcript.len(), 2);
        assert_eq!(
            snapshot.transcript[0].output,
            snapshot.transcript[1].output
        );
    }

    #[tokio::test]
    async fn test_unknown_command_echoes_original_input() {
        let controller = controller();

        controller.submit("doesnotexist").await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.transcript.len(), 1);
        let text = snapshot.transcript[0].output.text();
        assert!(text.contains("Command not found"));
        assert!(text.contains("doesnotexist"));
    }

    #[tokio::test]
    async fn test_clear_empties_transcript_without_new_entry() {
        let controller = controller();

        controller.submit("help").await;
        controller.submit("sudo").await;
        assert_eq!(controller.transcript_len(), 2);

        controller.submit("clear").await;
        assert_eq!(controller.transcript_len(), 0);

        // 大小写归一同样适用于 clear
        controller.submit("help").await;
        controller.submit("CLEAR").await;
        assert_eq!(controller.transcript_len(), 0);
    }

    #[tokio::test]
    async fn test_clear_removes_welcome_banner() {
        let registry = CommandRegistry::new(create_default_config(), EffectSink::disabled());
        let controller = SessionController::new(registry, Duration::ZERO)
            .with_welcome(crate::commands::content::welcome());
        assert_eq!(controller.transcript_len(), 1);

        controller.submit("clear").await;
        assert_eq!(controller.transcript_len(), 0);
    }

    #[tokio::test]
    async fn test_recall_sequence() {
        let controller = controller();

        controller.submit("a").await;
        controller.submit("b").await;

        controller.recall_previous();
        assert_eq!(controller.pending_input(), "b");

        controller.recall_previous();
        assert_eq!(controller.pending_input(), "a");

        // 到最早一条后继续回溯是无操作
        controller.recall_previous();
        assert_eq!(controller.pending_input(), "a");

        controller.recall_next();
        assert_eq!(controller.pending_input(), "b");

        // 越过最新一条后退出回溯并清空输入框
        controller.recall_next();
        assert_eq!(controller.pending_input(), "");
    }

    #[tokio::test]
    async fn test_recall_next_without_recalling_is_noop() {
        let controller = controller();

        controller.submit("a").await;
        controller.set_pending_input("draft");

        controller.recall_next();
        controller.recall_next();
        assert_eq!(controller.pending_input(), "draft");
    }

    #[tokio::test]
    async fn test_recall_previous_with_empty_history_is_noop() {
        let controller = controller();

        controller.recall_previous();
        assert_eq!(controller.pending_input(), "");
    }

    #[tokio::test]
    async fn test_submit_resets_recall_cursor() {
        let controller = controller();

        controller.submit("a").await;
        controller.submit("b").await;
        controller.recall_previous();
        assert_eq!(controller.pending_input(), "b");

        // 提交后回溯状态复位，再次回溯从最新一条（刚提交的 c）开始
        controller.submit("c").await;
        controller.recall_previous();
        assert_eq!(controller.pending_input(), "c");
    }

    #[tokio::test]
    async fn test_set_pending_input_is_unvalidated_assignment() {
        let controller = controller();

        controller.set_pending_input("  anything goes  ");
        assert_eq!(controller.pending_input(), "  anything goes  ");
    }

    #[tokio::test]
    async fn test_busy_flag_toggles_during_processing() {
        use std::sync::Arc;

        let registry = CommandRegistry::new(create_default_config(), EffectSink::disabled());
        let controller = Arc::new(SessionController::new(
            registry,
            Duration::from_millis(100),
        ));
        assert!(!controller.is_busy());

        let worker = Arc::clone(&controller);
        let handle = tokio::spawn(async move { worker.submit("help").await });

        // 延迟窗口内忙碌标志应为真
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(controller.is_busy());

        handle.await.expect("提交任务失败");
        assert!(!controller.is_busy());
        assert_eq!(controller.transcript_len(), 1);
    }
}
