//! 状态栏模块

use crate::app::AppState;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// 获取状态栏帮助项（用于计算高度和渲染）
pub fn get_status_help_items(state: &AppState) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![
        ("^S", "Save"),
        ("^E", if state.multi_edit { "Normal" } else { "Multi Edit" }),
        ("Esc", "Hide"),
        ("^T", "New"),
    ];
    if !state.tabs.is_empty() {
        items.push(("^W", "Close"));
    }
    if state.tabs.len() > 1 {
        items.push(("Tab", "Next"));
    }
    items.push(("^Q", "Quit"));
    items
}

/// 计算状态栏需要的高度
pub fn calculate_status_bar_height(state: &AppState, screen_width: usize) -> u16 {
    // 如果有状态消息，只需要1行
    if state.status_text.is_some() {
        return 1;
    }

    let items = get_status_help_items(state);
    let lines = build_status_help_lines(&items, screen_width);
    (lines.len() as u16).clamp(1, 3) // 最少1行，最多3行
}

/// 根据可用宽度构建状态栏帮助提示行（自动换行）
pub fn build_status_help_lines<'a>(
    items: &[(&'a str, &'a str)],
    available_width: usize,
) -> Vec<Vec<(&'a str, &'a str)>> {
    let mut lines: Vec<Vec<(&'a str, &'a str)>> = Vec::new();
    let mut current_line: Vec<(&'a str, &'a str)> = Vec::new();
    let mut current_width: usize = 1; // 起始空格

    for (key, desc) in items.iter() {
        let separator_width = if current_line.is_empty() { 0 } else { 3 }; // " | "
        let item_width =
            separator_width + Line::raw(*key).width() + 2 + Line::raw(*desc).width(); // key + ": " + desc

        if current_width + item_width > available_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 1;
        }

        current_line.push((key, desc));
        current_width += item_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(Vec::new());
    }

    lines
}

/// 绘制状态栏
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if let Some(ref msg) = state.status_text {
        let status = Paragraph::new(format!(" ✗ {}", msg))
            .style(Style::default().fg(theme.error))
            .bg(theme.status_bg);
        frame.render_widget(status, area);
        return;
    }

    let items = get_status_help_items(state);
    let item_lines = build_status_help_lines(&items, area.width as usize);

    let key_style = Style::default().fg(theme.info);
    let desc_style = Style::default().fg(theme.status_fg);
    let sep_style = Style::default().fg(theme.border);

    let mut lines: Vec<Line> = Vec::new();
    for (n, line_items) in item_lines.into_iter().enumerate() {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, (key, desc)) in line_items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(": ", sep_style));
            spans.push(Span::styled(*desc, desc_style));
        }
        // 第一行末尾显示光标位置
        if n == 0 {
            if let Some(tab) = state.active_tab() {
                let (row, col) = tab.document.cursor();
                spans.push(Span::styled(
                    format!("   Ln {}, Col {}", row + 1, col + 1),
                    sep_style,
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    let status = Paragraph::new(lines).bg(theme.status_bg);
    frame.render_widget(status, area);
}
