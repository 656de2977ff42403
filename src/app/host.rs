//! 终端宿主实现
//! ViewHost 在命令与定时器回调期间借用单个标签页的表面；
//! SurfaceMetrics 在绘制期间提供只读查询

use super::ViewSurface;
use crate::host::{
    ColorRole, FontDescription, HostView, PaintHookId, TimerHandle, TimerQueue, ViewId,
    ViewMetrics, WidgetState,
};
use crate::overlay::Rgb;
use crate::ui::Theme;
use ratatui::text::Line;
use std::time::{Duration, Instant};

/// 终端中按字符格测量文本：宽度为显示宽度，高度为 1 行
///
/// 字体无法在终端中改变，忽略字体参数。
pub fn measure_text(text: &str) -> (f64, f64) {
    (Line::from(text).width() as f64, 1.0)
}

/// 单个视图的宿主接口
pub struct ViewHost<'a> {
    view: ViewId,
    surface: &'a mut ViewSurface,
    timers: &'a mut TimerQueue,
    theme: &'a Theme,
}

impl<'a> ViewHost<'a> {
    pub fn new(
        view: ViewId,
        surface: &'a mut ViewSurface,
        timers: &'a mut TimerQueue,
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            surface,
            timers,
            theme,
        }
    }
}

impl ViewMetrics for ViewHost<'_> {
    fn text_extents(&self, text: &str, _font: &FontDescription) -> (f64, f64) {
        measure_text(text)
    }

    fn theme_color(&self, role: ColorRole, state: WidgetState) -> Rgb {
        self.theme.color(role, state)
    }

    fn widget_state(&self) -> WidgetState {
        self.surface.state
    }

    fn visible_geometry(&self) -> (f64, f64) {
        (self.surface.geometry.0 as f64, self.surface.geometry.1 as f64)
    }
}

impl HostView for ViewHost<'_> {
    fn request_redraw(&mut self) {
        self.surface.needs_redraw = true;
    }

    fn subscribe_paint(&mut self) -> PaintHookId {
        self.surface.paint.subscribe()
    }

    fn unsubscribe_paint(&mut self, id: PaintHookId) {
        self.surface.paint.unsubscribe(id);
    }

    fn schedule_timer(&mut self, interval: Duration) -> TimerHandle {
        self.timers.schedule(self.view, interval, Instant::now())
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.cancel(handle);
    }
}

/// 绘制期间的只读视图查询
pub struct SurfaceMetrics<'a> {
    pub geometry: (u16, u16),
    pub state: WidgetState,
    pub theme: &'a Theme,
}

impl ViewMetrics for SurfaceMetrics<'_> {
    fn text_extents(&self, text: &str, _font: &FontDescription) -> (f64, f64) {
        measure_text(text)
    }

    fn theme_color(&self, role: ColorRole, state: WidgetState) -> Rgb {
        self.theme.color(role, state)
    }

    fn widget_state(&self) -> WidgetState {
        self.state
    }

    fn visible_geometry(&self) -> (f64, f64) {
        (self.geometry.0 as f64, self.geometry.1 as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_text_uses_display_width() {
        assert_eq!(measure_text("Saved"), (5.0, 1.0));
        assert_eq!(measure_text("已保存"), (6.0, 1.0));
        assert_eq!(measure_text(""), (0.0, 1.0));
    }

    #[test]
    fn test_view_host_routes_to_surface_and_queue() {
        let theme = Theme::default();
        let mut surface = ViewSurface::new();
        let mut timers = TimerQueue::new();
        surface.geometry = (80, 24);

        let mut host = ViewHost::new(ViewId(7), &mut surface, &mut timers, &theme);
        assert_eq!(host.visible_geometry(), (80.0, 24.0));

        let hook = host.subscribe_paint();
        let timer = host.schedule_timer(Duration::from_millis(50));
        host.request_redraw();
        host.unsubscribe_paint(hook);

        assert!(timers.is_active(timer));
        assert!(surface.needs_redraw);
        assert!(surface.paint.hooks().is_empty());
    }
}
