/*!
 * 启动引导序列模块
 *
 * 终端可交互前播放的逐字显示引导文案。本模块只负责文案与
 * 播放进度的推进逻辑，节奏（tick 间隔）由展示层决定。
 */

/// 引导序列文案
#[derive(Debug, Clone)]
pub struct BootSequence {
    lines: Vec<String>,
}

impl BootSequence {
    /// 根据站主姓名构建默认引导序列
    pub fn for_owner(owner_name: &str) -> Self {
        Self {
            lines: vec![
                format!("Loading profile: {}", owner_name),
                "Establishing terminal connection...".to_string(),
                "Rendering UI components...".to_string(),
                "[███████████████████] 100% Complete".to_string(),
            ],
        }
    }

    /// 全部文案行
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// 引导播放进度
///
/// line 是当前正在显示的行下标，ch 是该行已显示的字符数。
/// line 越过最后一行即表示播放完毕。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootProgress {
    pub line: usize,
    pub ch: usize,
}

impl BootSequence {
    /// 推进一个字符
    ///
    /// 返回 false 表示序列已播完，进度不再变化。
    pub fn advance(&self, progress: &mut BootProgress) -> bool {
        let Some(line) = self.lines.get(progress.line) else {
            return false;
        };

        // 按字符推进而不是按字节，文案里有全角字符
        if progress.ch < line.chars().count() {
            progress.ch += 1;
        } else {
            progress.line += 1;
            progress.ch = 0;
        }

        progress.line < self.lines.len()
    }

    /// 是否已播放完毕
    pub fn is_finished(&self, progress: &BootProgress) -> bool {
        progress.line >= self.lines.len()
    }

    /// 当前可见内容：已完整显示的行 + 正在打字的行前缀
    pub fn visible(&self, progress: &BootProgress) -> (Vec<&str>, Option<String>) {
        let complete: Vec<&str> = self
            .lines
            .iter()
            .take(progress.line)
            .map(|l| l.as_str())
            .collect();

        let typing = self
            .lines
            .get(progress.line)
            .map(|line| line.chars().take(progress.ch).collect());

        (complete, typing)
    }
}
