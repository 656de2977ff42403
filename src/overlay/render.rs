//! 提示层绘制
//! 每次绘制事件调用一次；只读取状态，可重复调用

use super::{rounded_rectangle, Canvas, OverlayMessage, PointF, RectF};
use crate::host::{ColorRole, PaintResult, PaintTarget, ViewMetrics};

/// 面板描边线宽
const LINE_WIDTH: f64 = 1.0;
/// 描边与上半部分填充的透明度系数
const OUTLINE_ALPHA: f64 = 0.8;
/// 下半部分填充的透明度系数
const LOWER_FILL_ALPHA: f64 = 0.6;

impl OverlayMessage {
    /// 在视图内容之上绘制提示
    ///
    /// 未在动画中或目标不是文本区时不绘制。始终返回 `NotHandled`，
    /// 宿主的默认内容照常显示。
    pub fn render<V, C>(&self, view: &V, target: PaintTarget, canvas: &mut C) -> PaintResult
    where
        V: ViewMetrics + ?Sized,
        C: Canvas + ?Sized,
    {
        if !self.is_animating() || target != PaintTarget::Text {
            return PaintResult::NotHandled;
        }

        let config = self.config();
        let opacity = self.fade_position().clamp(0.0, 1.0);

        let (text_width, text_height) = view.text_extents(self.text(), &config.font);
        let (geom_width, geom_height) = view.visible_geometry();
        let origin = PointF::new(
            (geom_width - text_width) / 2.0,
            (geom_height - text_height) / 2.0,
        );

        let state = view.widget_state();
        let fg = view.theme_color(ColorRole::Text, state);
        let lighter = view
            .theme_color(ColorRole::Base, state)
            .darken(config.darken_amount);
        let darker = lighter.darken(config.darken_amount);

        let panel = RectF::new(origin.x, origin.y, text_width, text_height)
            .inflate(config.margin.0, config.margin.1);
        let outline = rounded_rectangle(panel, config.corner_radius);

        canvas.stroke_path(&outline, fg.with_alpha(opacity * OUTLINE_ALPHA), LINE_WIDTH);

        canvas.push_clip(&outline);
        canvas.fill_rect(panel.top_half(), darker.with_alpha(opacity * OUTLINE_ALPHA));
        canvas.fill_rect(
            panel.bottom_half(),
            lighter.with_alpha(opacity * LOWER_FILL_ALPHA),
        );
        canvas.pop_clip();

        canvas.draw_text(origin, self.text(), &config.font, fg.with_alpha(opacity));

        PaintResult::NotHandled
    }
}
