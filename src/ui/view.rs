/*!
 * 界面渲染
 *
 * 把会话快照渲染成 ratatui 组件。内容只携带语义色调，
 * 色调到具体样式的映射在这里完成。
 */

use chrono::Local;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::terminal::types::{OutputLine, TextTone, TranscriptEntry};
use crate::ui::app::{App, AppPhase};

/// 绘制一帧
pub fn draw(frame: &mut Frame, app: &App) {
    match app.phase() {
        AppPhase::Booting => draw_boot(frame, app),
        AppPhase::Ready => draw_terminal(frame, app),
    }
}

/// 语义色调到样式的映射
fn tone_style(tone: TextTone) -> Style {
    match tone {
        TextTone::Heading => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TextTone::Accent => Style::default().fg(Color::Yellow),
        TextTone::Body => Style::default().fg(Color::Gray),
        TextTone::Muted => Style::default().fg(Color::DarkGray),
        TextTone::Error => Style::default().fg(Color::Red),
    }
}

/// 输出行转换为 ratatui 行
fn render_output_line(line: &OutputLine) -> Line<'_> {
    Line::from(
        line.spans
            .iter()
            .map(|span| Span::styled(span.text.as_str(), tone_style(span.tone)))
            .collect::<Vec<_>>(),
    )
}

/// 引导画面
fn draw_boot(frame: &mut Frame, app: &App) {
    let (complete, typing) = app.boot().visible(app.boot_progress());
    let green = Style::default().fg(Color::Green);

    let mut lines: Vec<Line> = complete
        .into_iter()
        .map(|l| Line::from(Span::styled(l, green)))
        .collect();

    if let Some(prefix) = typing {
        lines.push(Line::from(vec![
            Span::styled(prefix, green),
            Span::styled("█", green),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "System Status: Initializing...",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().padding(Padding::new(4, 4, 2, 2)))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, frame.area());
}

/// 终端主画面：页眉、转录区（含输入行）、页脚
fn draw_terminal(frame: &mut Frame, app: &App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, app, header_area);
    draw_transcript(frame, app, body_area);
    draw_footer(frame, footer_area);
}

/// 页眉：站主身份与终端标题
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let owner = &app.config().owner;

    let identity = Line::from(vec![
        Span::styled(
            owner.name.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", owner.title),
            Style::default().fg(Color::Gray),
        ),
    ]);
    let title = Line::from(Span::styled(
        "Portfolio Terminal v1.0.0",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(vec![identity, title]), area);
}

/// 页脚：时钟
fn draw_footer(frame: &mut Frame, area: Rect) {
    let clock = Line::from(Span::styled(
        Local::now().format("%H:%M:%S").to_string(),
        Style::default().fg(Color::Green),
    ))
    .right_aligned();

    frame.render_widget(Paragraph::new(clock), area);
}

/// 转录区：历史条目、忙碌指示、输入行
fn draw_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.controller().snapshot();
    let prompt = app.config().terminal.prompt.as_str();

    let mut lines: Vec<Line> = Vec::new();
    for entry in &snapshot.transcript {
        push_entry_lines(&mut lines, prompt, entry);
    }

    // 忙碌指示：Processing 后跟循环的点
    if snapshot.busy {
        let dots = ".".repeat((app.tick_count() % 4) as usize);
        lines.push(Line::from(Span::styled(
            format!("Processing{}", dots),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    // 输入行：提示符 + 待输入文本 + 光标
    lines.push(Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", snapshot.pending_input),
            Style::default().fg(Color::Green),
        ),
        Span::styled("█", Style::default().fg(Color::Green)),
    ]));

    // 估算换行后的总高度，让视口始终贴着底部
    let height = estimate_wrapped_height(&lines, area.width);
    let scroll = height.saturating_sub(area.height);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// 追加一条转录条目的渲染行
fn push_entry_lines<'a>(lines: &mut Vec<Line<'a>>, prompt: &'a str, entry: &'a TranscriptEntry) {
    // 欢迎横幅的 command_text 为空串，不渲染提示符行
    if !entry.command_text.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(prompt, Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {}", entry.command_text),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    for output_line in &entry.output.lines {
        lines.push(render_output_line(output_line));
    }

    lines.push(Line::from(""));
}

/// 估算自动换行后的渲染高度
fn estimate_wrapped_height(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }

    let width = width as usize;
    let mut height = 0usize;
    for line in lines {
        let len: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
        height += len.div_ceil(width).max(1);
    }

    height.min(u16::MAX as usize) as u16
}
