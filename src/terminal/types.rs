// 终端会话相关类型定义

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 文本语义色调
///
/// 内容生产者只标注语义，不携带任何具体颜色或排版信息；
/// 色调到样式的映射由展示层完成。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextTone {
    /// 段落标题
    Heading,
    /// 强调文本（命令名、项目名等）
    Accent,
    /// 正文
    Body,
    /// 次要信息
    Muted,
    /// 错误提示
    Error,
}

/// 输出片段：一段带语义色调的文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpan {
    pub tone: TextTone,
    pub text: String,
}

impl OutputSpan {
    /// 创建新的输出片段
    pub fn new(tone: TextTone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(TextTone::Heading, text)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(TextTone::Accent, text)
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::new(TextTone::Body, text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(TextTone::Muted, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(TextTone::Error, text)
    }
}

/// 输出行：若干片段的水平排列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputLine {
    pub spans: Vec<OutputSpan>,
}

impl OutputLine {
    /// 创建空行
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个片段（构建器风格）
    pub fn with_span(mut self, span: OutputSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// 创建只包含单个片段的行
    pub fn plain(tone: TextTone, text: impl Into<String>) -> Self {
        Self::new().with_span(OutputSpan::new(tone, text))
    }

    /// 行内所有文本拼接
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// 可渲染内容：命令输出的展示层无关表示
///
/// 空内容是"无输出"哨兵，clear 命令的生产者返回它。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderableContent {
    pub lines: Vec<OutputLine>,
}

impl RenderableContent {
    /// 创建空内容（"无输出"哨兵）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 内容是否为空
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 追加一行（构建器风格）
    pub fn with_line(mut self, line: OutputLine) -> Self {
        self.lines.push(line);
        self
    }

    /// 追加一个空行作为段落间隔
    pub fn with_blank(self) -> Self {
        self.with_line(OutputLine::new())
    }

    /// 追加一行
    pub fn push_line(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    /// 所有行的纯文本拼接（按行换行）
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 转录条目：一次命令提交与它的输出
///
/// 创建后不可变；按插入顺序追加，插入顺序即展示顺序。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    /// 用户提交的原始命令文本（欢迎横幅条目为空串）
    pub command_text: String,

    /// 命令输出
    pub output: RenderableContent,

    /// 条目创建时间
    pub occurred_at: DateTime<Local>,
}

impl TranscriptEntry {
    /// 创建新的转录条目
    pub fn new(command_text: impl Into<String>, output: RenderableContent) -> Self {
        Self {
            command_text: command_text.into(),
            output,
            occurred_at: Local::now(),
        }
    }
}

/// 会话状态快照
///
/// 供展示层每帧读取的只读视图，与控制器内部状态解耦。
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// 转录记录（按时间顺序）
    pub transcript: Vec<TranscriptEntry>,

    /// 当前输入框文本
    pub pending_input: String,

    /// 是否正在处理命令
    pub busy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_builder() {
        let line = OutputLine::new()
            .with_span(OutputSpan::accent("help"))
            .with_span(OutputSpan::body(" - Show this help message"));

        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.text(), "help - Show this help message");
    }

    #[test]
    fn test_renderable_content_empty_sentinel() {
        let content = RenderableContent::empty();
        assert!(content.is_empty());
        assert_eq!(content.text(), "");

        let content = content.with_line(OutputLine::plain(TextTone::Body, "hello"));
        assert!(!content.is_empty());
    }

    #[test]
    fn test_renderable_content_text_joins_lines() {
        let content = RenderableContent::empty()
            .with_line(OutputLine::plain(TextTone::Heading, "About Me"))
            .with_blank()
            .with_line(OutputLine::plain(TextTone::Body, "Hello!"));

        assert_eq!(content.text(), "About Me\n\nHello!");
    }

    #[test]
    fn test_transcript_entry_creation() {
        let entry = TranscriptEntry::new("help", RenderableContent::empty());
        assert_eq!(entry.command_text, "help");
        assert!(entry.output.is_empty());
    }
}
