//! 应用状态管理模块
//! 包含全局 AppState：标签页、定时器队列与提示层的分发逻辑

mod document;
mod host;
mod tab;

pub use document::*;
pub use host::*;
pub use tab::*;

use crate::config::AppConfig;
use crate::host::{TimerQueue, ViewId, WidgetState};
use crate::overlay::{OverlayMessage, TickControl};
use crate::ui::Theme;
use std::time::Instant;

/// 保存成功时显示的提示
pub const MSG_SAVED: &str = "Saved";
/// 进入多重编辑模式时显示的提示
pub const MSG_MULTI_EDIT_ON: &str = "Multi Edit Mode";
/// 退出多重编辑模式时显示的提示
pub const MSG_MULTI_EDIT_OFF: &str = "Normal Mode";

/// 全局应用状态
pub struct AppState {
    /// 打开的标签页
    pub tabs: Vec<EditorTab>,
    /// 当前激活的标签页索引
    pub active_tab: usize,
    /// 宿主定时器队列
    pub timers: TimerQueue,
    /// 应用配置
    pub config: AppConfig,
    /// 当前主题
    pub theme: Theme,
    /// 是否应该退出
    pub should_quit: bool,
    /// 多重编辑模式
    pub multi_edit: bool,
    /// 状态栏文字（例如保存失败原因）
    pub status_text: Option<String>,
    /// 界面需要整体重绘（按键、窗口大小变化等）
    dirty: bool,
    next_view_id: u64,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::by_name(&config.settings.theme);
        Self {
            tabs: Vec::new(),
            active_tab: 0,
            timers: TimerQueue::new(),
            config,
            theme,
            should_quit: false,
            multi_edit: false,
            status_text: None,
            dirty: true,
            next_view_id: 0,
        }
    }

    /// 打开标签页并切换过去
    pub fn open_tab(&mut self, document: Document) -> ViewId {
        self.next_view_id += 1;
        let id = ViewId(self.next_view_id);
        let tab = EditorTab::open(
            id,
            document,
            &mut self.timers,
            &self.theme,
            &self.config.overlay,
        );
        self.tabs.push(tab);
        self.activate(self.tabs.len() - 1);
        id
    }

    /// 关闭当前标签页
    pub fn close_active_tab(&mut self) {
        if self.active_tab >= self.tabs.len() {
            return;
        }
        let mut tab = self.tabs.remove(self.active_tab);
        tab.close(&mut self.timers, &self.theme);
        // 兜底：清理该视图遗留的定时器
        self.timers.cancel_view(tab.id);

        if self.tabs.is_empty() {
            self.active_tab = 0;
            self.dirty = true;
        } else {
            self.activate(self.active_tab.min(self.tabs.len() - 1));
        }
    }

    /// 切换到下一个标签页
    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.activate((self.active_tab + 1) % self.tabs.len());
        }
    }

    /// 切换到上一个标签页
    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            let len = self.tabs.len();
            self.activate((self.active_tab + len - 1) % len);
        }
    }

    fn activate(&mut self, index: usize) {
        self.active_tab = index;
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.surface.state = if i == index {
                WidgetState::Focused
            } else {
                WidgetState::Normal
            };
        }
        self.dirty = true;
    }

    pub fn active_tab(&self) -> Option<&EditorTab> {
        self.tabs.get(self.active_tab)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut EditorTab> {
        self.tabs.get_mut(self.active_tab)
    }

    /// 在当前标签页的提示层上执行操作
    fn with_active_overlay(&mut self, f: impl FnOnce(&mut OverlayMessage, &mut ViewHost<'_>)) {
        if let Some(tab) = self.tabs.get_mut(self.active_tab) {
            let (overlay, mut host) = tab.split(&mut self.timers, &self.theme);
            f(overlay, &mut host);
        }
    }

    /// 在当前标签页显示提示
    pub fn show_message(&mut self, text: &str) {
        self.with_active_overlay(|overlay, host| overlay.show(host, text));
    }

    /// 立即隐藏当前标签页的提示
    pub fn hide_message(&mut self) {
        self.with_active_overlay(|overlay, host| overlay.hide(host));
    }

    /// 保存当前文档并显示结果
    pub fn save_active(&mut self) {
        let Some(tab) = self.tabs.get_mut(self.active_tab) else {
            return;
        };
        let saved = tab.document.save().map(|p| p.display().to_string());
        match saved {
            Ok(path) => {
                log::info!("saved {}", path);
                self.config.add_document(&path);
                self.status_text = None;
                self.show_message(MSG_SAVED);
            }
            Err(e) => {
                log::warn!("save failed: {}", e);
                self.status_text = Some(format!("Save failed: {}", e));
            }
        }
        self.dirty = true;
    }

    /// 切换多重编辑模式
    pub fn toggle_multi_edit(&mut self) {
        self.multi_edit = !self.multi_edit;
        let msg = if self.multi_edit {
            MSG_MULTI_EDIT_ON
        } else {
            MSG_MULTI_EDIT_OFF
        };
        self.show_message(msg);
        self.dirty = true;
    }

    /// 分发到期的定时器
    pub fn dispatch_timers(&mut self, now: Instant) {
        for (handle, view) in self.timers.fire_due(now) {
            let Some(tab) = self.tabs.iter_mut().find(|t| t.id == view) else {
                self.timers.cancel(handle);
                continue;
            };
            if tab.overlay.timer_handle() != Some(handle) {
                log::debug!("dropping stale timer {:?}", handle);
                self.timers.cancel(handle);
                continue;
            }
            let (overlay, mut host) = tab.split(&mut self.timers, &self.theme);
            if overlay.tick(&mut host) == TickControl::Break {
                self.timers.cancel(handle);
            }
        }
    }

    /// 标记需要重绘
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// 取出并清除重绘请求
    pub fn take_redraw(&mut self) -> bool {
        let mut redraw = std::mem::take(&mut self.dirty);
        for tab in &mut self.tabs {
            redraw |= std::mem::take(&mut tab.surface.needs_redraw);
        }
        redraw
    }

    /// 退出前卸载所有提示层
    pub fn shutdown(&mut self) {
        for tab in &mut self.tabs {
            tab.close(&mut self.timers, &self.theme);
        }
        self.should_quit = true;
    }

    /// 需要持久化的文档路径
    pub fn document_paths(&self) -> Vec<String> {
        self.tabs
            .iter()
            .filter_map(|t| t.document.path())
            .map(|p| p.display().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn state_with_tab() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.open_tab(Document::new());
        state
    }

    /// 逐个周期推进定时器
    fn run_ticks(state: &mut AppState, ticks: usize) {
        for _ in 0..ticks {
            let Some(deadline) = state.timers.next_deadline() else {
                return;
            };
            state.dispatch_timers(deadline);
        }
    }

    #[test]
    fn test_open_tab_attaches_overlay() {
        let state = state_with_tab();
        let tab = state.active_tab().unwrap();
        assert!(tab.overlay.is_attached());
        assert_eq!(tab.surface.paint.hooks(), &[tab.overlay.paint_hook().unwrap()]);
        assert_eq!(tab.surface.state, WidgetState::Focused);
    }

    #[test]
    fn test_show_message_runs_to_completion() {
        let mut state = state_with_tab();
        state.show_message(MSG_SAVED);
        assert_eq!(state.timers.len(), 1);

        run_ticks(&mut state, 5);
        let tab = state.active_tab().unwrap();
        assert_eq!(tab.overlay.fade_position(), 1.0);
        assert!(state.take_redraw());

        run_ticks(&mut state, 100);
        let tab = state.active_tab().unwrap();
        assert!(!tab.overlay.is_animating());
        assert!(state.timers.is_empty());
    }

    #[test]
    fn test_hide_message_cancels_timer() {
        let mut state = state_with_tab();
        state.show_message("x");
        run_ticks(&mut state, 2);
        state.hide_message();
        assert!(state.timers.is_empty());
        assert_eq!(state.active_tab().unwrap().overlay.fade_position(), 0.0);
    }

    #[test]
    fn test_close_tab_stops_overlay() {
        let mut state = state_with_tab();
        state.open_tab(Document::new());
        state.show_message("x");
        assert_eq!(state.timers.len(), 1);

        state.close_active_tab();
        assert_eq!(state.tabs.len(), 1);
        assert!(state.timers.is_empty());
        assert_eq!(state.active_tab, 0);
        assert_eq!(state.active_tab().unwrap().surface.state, WidgetState::Focused);
    }

    #[test]
    fn test_background_tab_keeps_animating() {
        let mut state = state_with_tab();
        state.show_message("first");
        state.open_tab(Document::new());
        run_ticks(&mut state, 3);

        assert!(state.tabs[0].overlay.fade_position() > 0.0);
        assert!(!state.tabs[1].overlay.is_animating());
    }

    #[test]
    fn test_stale_timer_is_dropped() {
        let mut state = state_with_tab();
        let view = state.active_tab().unwrap().id;
        let orphan = state
            .timers
            .schedule(view, Duration::from_millis(10), Instant::now());

        run_ticks(&mut state, 1);
        assert!(!state.timers.is_active(orphan));
        assert_eq!(state.active_tab().unwrap().overlay.fade_position(), 0.0);
    }

    #[test]
    fn test_save_shows_message() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut state = AppState::new(AppConfig::default());
        state.open_tab(Document::load(&path).unwrap());

        state.save_active();
        assert!(path.exists());
        assert!(state.status_text.is_none());
        assert_eq!(state.active_tab().unwrap().overlay.text(), MSG_SAVED);
        assert_eq!(state.config.documents, vec![path.display().to_string()]);
    }

    #[test]
    fn test_save_untitled_reports_error() {
        let mut state = state_with_tab();
        state.save_active();
        assert!(state.status_text.is_some());
        assert!(!state.active_tab().unwrap().overlay.is_animating());
    }

    #[test]
    fn test_toggle_multi_edit_shows_message() {
        let mut state = state_with_tab();
        state.toggle_multi_edit();
        assert!(state.multi_edit);
        assert_eq!(state.active_tab().unwrap().overlay.text(), MSG_MULTI_EDIT_ON);
        state.toggle_multi_edit();
        assert_eq!(state.active_tab().unwrap().overlay.text(), MSG_MULTI_EDIT_OFF);
        // 同一条提示复用定时器
        assert_eq!(state.timers.len(), 1);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let mut state = state_with_tab();
        state.open_tab(Document::new());
        state.show_message("x");
        state.shutdown();
        assert!(state.timers.is_empty());
        assert!(state.tabs.iter().all(|t| !t.overlay.is_attached()));
        assert!(state.should_quit);
    }
}
