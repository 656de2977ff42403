//! 测试用宿主：记录重绘、定时器与绘制钩子

use super::{OverlayMessage, Rgb, TickControl};
use crate::host::{
    ColorRole, FontDescription, HostView, PaintHookId, TimerHandle, ViewMetrics, WidgetState,
};
use std::time::Duration;

pub(crate) struct FakeHost {
    pub redraws: usize,
    pub paint_hooks: Vec<PaintHookId>,
    pub active_timers: Vec<TimerHandle>,
    pub cancelled: Vec<TimerHandle>,
    pub scheduled_intervals: Vec<u64>,
    pub geometry: (f64, f64),
    /// 每个字符的 (宽, 高)
    pub glyph_size: (f64, f64),
    pub text_color: Rgb,
    pub base_color: Rgb,
    pub state: WidgetState,
    next_id: u64,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            redraws: 0,
            paint_hooks: Vec::new(),
            active_timers: Vec::new(),
            cancelled: Vec::new(),
            scheduled_intervals: Vec::new(),
            geometry: (400.0, 200.0),
            glyph_size: (10.0, 20.0),
            text_color: Rgb::new(0.9, 0.9, 0.9),
            base_color: Rgb::new(0.5, 0.4, 0.3),
            state: WidgetState::Normal,
            next_id: 0,
        }
    }

    /// 像宿主事件循环一样触发控制器的定时器，返回是否触发
    pub fn fire(&mut self, overlay: &mut OverlayMessage) -> bool {
        let Some(handle) = overlay.timer_handle() else {
            return false;
        };
        if !self.active_timers.contains(&handle) {
            return false;
        }
        if overlay.tick(self) == TickControl::Break {
            self.active_timers.retain(|h| *h != handle);
        }
        true
    }
}

impl ViewMetrics for FakeHost {
    fn text_extents(&self, text: &str, _font: &FontDescription) -> (f64, f64) {
        (text.chars().count() as f64 * self.glyph_size.0, self.glyph_size.1)
    }

    fn theme_color(&self, role: ColorRole, _state: WidgetState) -> Rgb {
        match role {
            ColorRole::Text => self.text_color,
            ColorRole::Base => self.base_color,
        }
    }

    fn widget_state(&self) -> WidgetState {
        self.state
    }

    fn visible_geometry(&self) -> (f64, f64) {
        self.geometry
    }
}

impl HostView for FakeHost {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn subscribe_paint(&mut self) -> PaintHookId {
        self.next_id += 1;
        let id = PaintHookId(self.next_id);
        self.paint_hooks.push(id);
        id
    }

    fn unsubscribe_paint(&mut self, id: PaintHookId) {
        self.paint_hooks.retain(|h| *h != id);
    }

    fn schedule_timer(&mut self, interval: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active_timers.push(handle);
        self.scheduled_intervals.push(interval.as_millis() as u64);
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.active_timers.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
