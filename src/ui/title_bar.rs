//! 标题栏模块（应用名 + 标签页）

use crate::app::AppState;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// 绘制标题栏
pub fn draw_title_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = vec![Span::styled(
        " fadenote ",
        Style::default().fg(theme.title).bold(),
    )];

    for (i, tab) in state.tabs.iter().enumerate() {
        let label = format!(" {} ", tab.document.title());
        let style = if i == state.active_tab {
            Style::default().fg(theme.fg_focused).bg(theme.selection).bold()
        } else {
            Style::default().fg(theme.status_fg)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, style));
    }

    if state.multi_edit {
        spans.push(Span::styled("  [MULTI]", Style::default().fg(theme.success)));
    }

    let title = Paragraph::new(Line::from(spans)).bg(theme.status_bg);
    frame.render_widget(title, area);
}
