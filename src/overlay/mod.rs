//! 提示层模块
//! 在文本视图上方显示短暂的淡入、停留、淡出提示消息
//!
//! 状态机：
//! - Idle: 透明度为 0，没有定时器
//! - Animating: 定时器运行中，透明度上升、停留在 1 或下降
//!
//! 控制器只通过 HostView 与宿主交互，自身不持有视图引用。

mod canvas;
mod color;
mod config;
mod path;
mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use canvas::*;
pub use color::*;
pub use config::*;
pub use path::*;

use crate::host::{HostView, PaintHookId, TimerHandle};

/// 判断到达 0 或 1 时的容差，避免浮点累加误差多走或少走一个 tick
const SNAP_EPSILON: f64 = 1e-9;

/// 淡入淡出方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeDirection {
    #[default]
    In,
    Out,
}

impl FadeDirection {
    /// 增量符号（+1 / -1）
    pub fn sign(self) -> f64 {
        match self {
            FadeDirection::In => 1.0,
            FadeDirection::Out => -1.0,
        }
    }
}

/// tick 之后宿主定时器是否继续
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    /// 停止重复，宿主应移除该定时器
    Break,
}

/// 提示层控制器（每个视图一个）
#[derive(Debug)]
pub struct OverlayMessage {
    text: String,
    /// 0 = 完全隐藏，1 = 完全不透明
    fade_position: f64,
    fade_direction: FadeDirection,
    /// 停留在 1 的 tick 数
    visible_counter: u32,
    config: OverlayConfig,
    timer: Option<TimerHandle>,
    /// stop 之后为 None
    paint_hook: Option<PaintHookId>,
}

impl OverlayMessage {
    /// 挂载到视图：注册绘制钩子，状态全部清零
    pub fn attach(host: &mut impl HostView, config: OverlayConfig) -> Self {
        let paint_hook = host.subscribe_paint();
        Self {
            text: String::new(),
            fade_position: 0.0,
            fade_direction: FadeDirection::In,
            visible_counter: 0,
            config: config.sanitized(),
            timer: None,
            paint_hook: Some(paint_hook),
        }
    }

    /// 显示消息
    ///
    /// 若已在动画中，则从当前透明度重新淡入，不会先跳回 0。
    pub fn show(&mut self, host: &mut impl HostView, text: impl Into<String>) {
        if self.paint_hook.is_none() {
            log::warn!("show() on a detached overlay ignored");
            return;
        }

        self.text = text.into();
        self.fade_direction = FadeDirection::In;
        self.visible_counter = 0;

        if self.timer.is_none() {
            self.timer = Some(host.schedule_timer(self.config.tick_interval()));
            log::debug!("overlay animating: {:?}", self.text);
        }
    }

    /// 立即隐藏：取消定时器并清零透明度
    pub fn hide(&mut self, host: &mut impl HostView) {
        if let Some(handle) = self.timer.take() {
            host.cancel_timer(handle);
            self.fade_position = 0.0;
            self.visible_counter = 0;
            host.request_redraw();
            log::debug!("overlay hidden");
        }
    }

    /// 从视图卸载，释放定时器与绘制钩子
    pub fn stop(&mut self, host: &mut impl HostView) {
        self.hide(host);
        if let Some(id) = self.paint_hook.take() {
            host.unsubscribe_paint(id);
        }
    }

    /// 定时器回调：推进一步动画
    pub fn tick(&mut self, host: &mut impl HostView) -> TickControl {
        if self.timer.is_none() {
            log::debug!("stale overlay tick ignored");
            return TickControl::Break;
        }

        let mut control = TickControl::Continue;
        self.fade_position += self.fade_direction.sign() * self.config.fade_speed;

        if self.fade_position >= 1.0 - SNAP_EPSILON {
            self.fade_position = 1.0;
            self.visible_counter += 1;
        } else if self.fade_position <= SNAP_EPSILON {
            self.fade_position = 0.0;
            self.visible_counter = 0;
            self.timer = None;
            control = TickControl::Break;
            log::debug!("overlay faded out");
        }

        if self.visible_counter > self.config.visible_max() {
            self.fade_direction = FadeDirection::Out;
        }

        host.request_redraw();
        control
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fade_position(&self) -> f64 {
        self.fade_position
    }

    pub fn fade_direction(&self) -> FadeDirection {
        self.fade_direction
    }

    pub fn visible_counter(&self) -> u32 {
        self.visible_counter
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// 是否处于动画状态（定时器运行中）
    pub fn is_animating(&self) -> bool {
        self.timer.is_some()
    }

    /// 当前定时器句柄
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// 当前绘制钩子
    pub fn paint_hook(&self) -> Option<PaintHookId> {
        self.paint_hook
    }

    /// 是否仍挂载在视图上
    pub fn is_attached(&self) -> bool {
        self.paint_hook.is_some()
    }
}
