//! 编辑器视图
//! 绘制顺序：先绘制宿主内容（行号栏与文本），再依次调用视图的绘制钩子

use crate::app::{AppState, EditorTab, SurfaceMetrics};
use crate::host::{PaintResult, PaintTarget, WidgetState};
use crate::overlay::Rgb;
use crate::ui::{color_to_rgb, BufferCanvas, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// 行号栏宽度（数字位数 + 左右留白）
fn gutter_width(line_count: usize) -> u16 {
    line_count.max(1).to_string().len() as u16 + 2
}

/// 让光标保持可见的首行
fn scroll_offset(cursor_row: usize, height: u16) -> usize {
    cursor_row.saturating_sub((height as usize).saturating_sub(1))
}

/// 绘制当前标签页
pub fn draw_editor(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let line_numbers = state.config.settings.line_numbers;
    let theme = &state.theme;
    let Some(tab) = state.tabs.get_mut(state.active_tab) else {
        let hint = Paragraph::new(" No open documents. Ctrl+T: new tab, Ctrl+Q: quit")
            .style(Style::default().fg(theme.status_fg).bg(theme.bg));
        frame.render_widget(hint, area);
        return;
    };

    let (gutter_area, text_area) = if line_numbers {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(gutter_width(tab.document.lines().len())),
                Constraint::Min(1),
            ])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    let view_state = tab.surface.state;
    let bg = theme.view_bg(view_state);
    let fg = match view_state {
        WidgetState::Normal => theme.fg,
        WidgetState::Focused => theme.fg_focused,
    };

    // === 宿主内容 ===
    let (cursor_row, cursor_col) = tab.document.cursor();
    let scroll = scroll_offset(cursor_row, text_area.height);
    let visible = tab
        .document
        .lines()
        .iter()
        .skip(scroll)
        .take(text_area.height as usize);

    let text_lines: Vec<Line> = visible.clone().map(|l| Line::raw(l.as_str())).collect();
    frame.render_widget(
        Paragraph::new(text_lines).style(Style::default().fg(fg).bg(bg)),
        text_area,
    );

    if let Some(gutter) = gutter_area {
        let width = (gutter.width as usize).saturating_sub(1);
        let numbers: Vec<Line> = (scroll..scroll + visible.count())
            .map(|i| Line::raw(format!("{:>width$} ", i + 1)))
            .collect();
        frame.render_widget(
            Paragraph::new(numbers).style(Style::default().fg(theme.gutter_fg).bg(bg)),
            gutter,
        );
    }

    if text_area.height > 0 {
        let line = &tab.document.lines()[cursor_row];
        let prefix: String = line.chars().take(cursor_col).collect();
        let offset = (Line::raw(prefix).width() as u16).min(text_area.width.saturating_sub(1));
        let x = text_area.x + offset;
        let y = text_area.y + (cursor_row - scroll) as u16;
        frame.set_cursor_position((x, y));
    }

    // === 绘制钩子 ===
    tab.surface.geometry = (text_area.width, text_area.height);
    let backdrop = color_to_rgb(bg).unwrap_or(Rgb::BLACK);
    if let Some(gutter) = gutter_area {
        let buf = frame.buffer_mut();
        run_paint_hooks(buf, tab, PaintTarget::Gutter, gutter, theme, backdrop);
    }
    let buf = frame.buffer_mut();
    run_paint_hooks(buf, tab, PaintTarget::Text, text_area, theme, backdrop);
}

/// 按注册顺序调用视图的绘制钩子，直到某个钩子完全处理该区域
pub fn run_paint_hooks(
    buf: &mut Buffer,
    tab: &EditorTab,
    target: PaintTarget,
    area: Rect,
    theme: &Theme,
    backdrop: Rgb,
) {
    let metrics = SurfaceMetrics {
        geometry: (area.width, area.height),
        state: tab.surface.state,
        theme,
    };
    for hook in tab.surface.paint.hooks() {
        let mut canvas = BufferCanvas::new(buf, area, backdrop);
        let result = if tab.overlay.paint_hook() == Some(*hook) {
            tab.overlay.render(&metrics, target, &mut canvas)
        } else {
            log::debug!("paint hook {:?} has no participant", hook);
            PaintResult::NotHandled
        };
        if result == PaintResult::Handled {
            break;
        }
    }
}
