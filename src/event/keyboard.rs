//! 键盘事件处理模块

use crate::app::{AppState, Document};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 处理键盘事件，返回是否需要重绘
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(handle_control_key(state, key.code));
    }

    match key.code {
        KeyCode::Esc => state.hide_message(),
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.prev_tab(),
        code => return Ok(handle_edit_key(state, code)),
    }
    Ok(true)
}

/// Ctrl 组合键
fn handle_control_key(state: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('s') => state.save_active(),
        KeyCode::Char('e') => state.toggle_multi_edit(),
        KeyCode::Char('t') => {
            state.open_tab(Document::new());
        }
        KeyCode::Char('w') => state.close_active_tab(),
        _ => return false,
    }
    true
}

/// 编辑按键，转发给当前文档
fn handle_edit_key(state: &mut AppState, code: KeyCode) -> bool {
    let Some(tab) = state.active_tab_mut() else {
        return false;
    };
    let doc = &mut tab.document;
    match code {
        KeyCode::Char(c) => doc.insert_char(c),
        KeyCode::Enter => doc.insert_newline(),
        KeyCode::Backspace => doc.backspace(),
        KeyCode::Left => doc.move_left(),
        KeyCode::Right => doc.move_right(),
        KeyCode::Up => doc.move_up(),
        KeyCode::Down => doc.move_down(),
        _ => return false,
    }
    // 编辑后清除上一次的保存错误
    state.status_text = None;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{Event, KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(state, key(code, KeyModifiers::NONE)).unwrap()
    }

    fn ctrl(state: &mut AppState, c: char) -> bool {
        handle_key_event(state, key(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap()
    }

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.open_tab(Document::new());
        state
    }

    #[test]
    fn test_typing_edits_active_document() {
        let mut state = state();
        assert!(press(&mut state, KeyCode::Char('h')));
        assert!(press(&mut state, KeyCode::Char('i')));
        assert!(press(&mut state, KeyCode::Enter));
        let doc = &state.active_tab().unwrap().document;
        assert_eq!(doc.lines(), &["hi", ""]);
    }

    #[test]
    fn test_ctrl_e_shows_message_and_esc_hides() {
        let mut state = state();
        assert!(ctrl(&mut state, 'e'));
        assert!(state.active_tab().unwrap().overlay.is_animating());

        assert!(press(&mut state, KeyCode::Esc));
        assert!(!state.active_tab().unwrap().overlay.is_animating());
        assert!(state.timers.is_empty());
    }

    #[test]
    fn test_tab_management_keys() {
        let mut state = state();
        ctrl(&mut state, 't');
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.active_tab, 1);

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.active_tab, 0);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.active_tab, 1);

        ctrl(&mut state, 'w');
        assert_eq!(state.tabs.len(), 1);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut state = state();
        ctrl(&mut state, 'q');
        assert!(state.should_quit);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut state = state();
        assert!(!press(&mut state, KeyCode::F(5)));
        assert!(!ctrl(&mut state, 'z'));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = state();
        let mut release = key(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!crate::event::handle_event(&mut state, Event::Key(release)).unwrap());
        assert_eq!(state.active_tab().unwrap().document.lines(), &[""]);
    }
}
