//! 事件处理模块
//! 负责处理键盘输入和其他 crossterm 事件
//!
//! 交互设计：
//! - Ctrl+S: 保存并提示 "Saved"
//! - Ctrl+E: 切换多重编辑模式并提示
//! - Esc: 立即隐藏提示
//! - Ctrl+T / Ctrl+W: 新建 / 关闭标签页，Tab / Shift+Tab 切换
//! - 其他按键编辑文档

mod keyboard;

pub use keyboard::*;

use crate::app::AppState;
use crossterm::event::{Event, KeyEventKind};

/// 处理 crossterm 事件，返回是否需要重绘
pub fn handle_event(state: &mut AppState, event: Event) -> anyhow::Result<bool> {
    match event {
        Event::Key(key) => {
            // Windows 会同时发送 Press 和 Release 事件，只处理 Press 事件
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }
            handle_key_event(state, key)
        }
        Event::Resize(_cols, _rows) => Ok(true),
        _ => Ok(false),
    }
}
