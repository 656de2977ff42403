//! 布局管理模块
//! 负责主界面的布局划分

use crate::app::AppState;
use crate::ui::{calculate_status_bar_height, draw_editor, draw_status_bar, draw_title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// 绘制主界面
pub fn draw_ui(frame: &mut Frame, state: &mut AppState) {
    let screen_width = frame.area().width as usize;

    // 计算状态栏需要的高度（根据内容和屏幕宽度）
    let status_height = calculate_status_bar_height(state, screen_width);

    // 主布局：顶部标题 + 中间编辑区 + 底部状态栏
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // 标题栏
            Constraint::Min(1),                // 编辑区
            Constraint::Length(status_height), // 状态栏（动态高度）
        ])
        .split(frame.area());

    draw_title_bar(frame, main_chunks[0], state, &state.theme);
    draw_editor(frame, main_chunks[1], state);
    draw_status_bar(frame, main_chunks[2], state, &state.theme);
}
