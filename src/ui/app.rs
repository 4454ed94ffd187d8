/*!
 * 应用事件循环
 *
 * 把按键事件翻译成会话控制器的操作，按 tick 推进引导序列，
 * 并消费副作用事件（简历下载、会话终止）。控制器状态的渲染
 * 交给 view 模块。
 */

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval, Instant};
use tracing::{debug, info, warn};

use crate::boot::{BootProgress, BootSequence};
use crate::config::AppConfig;
use crate::effects::{self, SessionEvent};
use crate::terminal::SessionController;
use crate::ui::view;
use crate::utils::error::AppResult;

/// 引导序列的打字节奏
const TICK_INTERVAL: Duration = Duration::from_millis(35);

/// exit 命令生效到真正退出之间的停顿
const EXIT_GRACE: Duration = Duration::from_millis(1000);

/// 应用所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// 引导序列播放中
    Booting,
    /// 终端可交互
    Ready,
}

/// 应用事件循环
pub struct App {
    controller: Arc<SessionController>,
    config: AppConfig,
    boot: BootSequence,
    boot_progress: BootProgress,
    phase: AppPhase,
    /// exit 命令触发后的退出时刻
    exit_deadline: Option<Instant>,
    /// 已经历的 tick 数，用于忙碌指示动画
    tick_count: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new(controller: Arc<SessionController>, config: AppConfig) -> Self {
        let boot = BootSequence::for_owner(&config.owner.name);
        Self {
            controller,
            config,
            boot,
            boot_progress: BootProgress::default(),
            phase: AppPhase::Booting,
            exit_deadline: None,
            tick_count: 0,
        }
    }

    /// 运行事件循环直到退出
    pub async fn run(
        mut self,
        mut session_events: UnboundedReceiver<SessionEvent>,
    ) -> AppResult<()> {
        let mut terminal = ratatui::init();
        let result = self
            .event_loop(&mut terminal, &mut session_events)
            .await;
        ratatui::restore();
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
        session_events: &mut UnboundedReceiver<SessionEvent>,
    ) -> AppResult<()> {
        let mut input_events = EventStream::new();
        let mut tick = interval(TICK_INTERVAL);

        loop {
            terminal.draw(|frame| view::draw(frame, self))?;

            tokio::select! {
                _ = tick.tick() => {
                    if !self.on_tick() {
                        break;
                    }
                }
                Some(event) = session_events.recv() => {
                    self.on_session_event(event);
                }
                maybe_event = input_events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => {
                            if !self.on_key(key) {
                                break;
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!("读取终端输入事件失败: {}", e);
                        }
                        None => break,
                    }
                }
            }
        }

        Ok(())
    }

    /// 处理一个 tick；返回 false 表示应当退出
    fn on_tick(&mut self) -> bool {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.phase == AppPhase::Booting {
            self.boot.advance(&mut self.boot_progress);
            if self.boot.is_finished(&self.boot_progress) {
                info!("引导序列播放完毕，终端就绪");
                self.phase = AppPhase::Ready;
            }
        }

        if let Some(deadline) = self.exit_deadline {
            if Instant::now() >= deadline {
                return false;
            }
        }

        true
    }

    /// 处理副作用事件
    fn on_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::DownloadResume => {
                effects::spawn_resume_download(self.config.resume.clone());
            }
            SessionEvent::EndSession => {
                debug!("收到会话终止信号");
                self.exit_deadline = Some(Instant::now() + EXIT_GRACE);
            }
        }
    }

    /// 处理按键；返回 false 表示应当退出
    fn on_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        // Ctrl+C 随时退出
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        if self.phase == AppPhase::Booting {
            // 引导期间按键不进入输入框
            return true;
        }

        match key.code {
            KeyCode::Enter => {
                let raw = self.controller.pending_input();
                self.controller.set_pending_input("");

                let controller = Arc::clone(&self.controller);
                tokio::spawn(async move { controller.submit(&raw).await });
            }
            KeyCode::Up => self.controller.recall_previous(),
            KeyCode::Down => self.controller.recall_next(),
            KeyCode::Backspace => {
                let mut input = self.controller.pending_input();
                input.pop();
                self.controller.set_pending_input(input);
            }
            KeyCode::Char(c) => {
                let mut input = self.controller.pending_input();
                input.push(c);
                self.controller.set_pending_input(input);
            }
            KeyCode::Esc => return false,
            _ => {}
        }

        true
    }

    pub(crate) fn phase(&self) -> AppPhase {
        self.phase
    }

    pub(crate) fn boot(&self) -> &BootSequence {
        &self.boot
    }

    pub(crate) fn boot_progress(&self) -> &BootProgress {
        &self.boot_progress
    }

    pub(crate) fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub(crate) fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
